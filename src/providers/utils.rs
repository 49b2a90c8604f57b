use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;

use super::base::GenerateContentConfig;
use super::types::{message::Turn, tool::FunctionDeclaration};
use crate::errors::ProviderError;

/// Build the `generateContent` request body
pub fn build_request(
    contents: &[Turn],
    config: &GenerateContentConfig,
) -> Result<Value, ProviderError> {
    let mut payload = json!({ "contents": contents });

    if !config.system_instruction.is_empty() {
        payload["systemInstruction"] = json!({
            "parts": [{ "text": config.system_instruction }]
        });
    }

    let tools_spec = tools_to_gemini_spec(&config.tools)?;
    if !tools_spec.is_empty() {
        payload["tools"] = json!(tools_spec);
    }

    Ok(payload)
}

/// Convert tool declarations to Gemini's `tools` specification
pub fn tools_to_gemini_spec(tools: &[FunctionDeclaration]) -> Result<Vec<Value>, ProviderError> {
    validate_declarations(tools)?;
    if tools.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![json!({ "functionDeclarations": tools })])
}

/// Reject declarations the API would refuse: bad names and duplicates
pub fn validate_declarations(tools: &[FunctionDeclaration]) -> Result<(), ProviderError> {
    let mut tool_names = HashSet::new();
    for tool in tools {
        if !is_valid_function_name(&tool.name) {
            return Err(ProviderError::InvalidTool(format!(
                "The function name '{}' must start with a letter or underscore and match [a-zA-Z0-9_.-], at most 64 characters",
                tool.name
            )));
        }
        if !tool_names.insert(tool.name.as_str()) {
            return Err(ProviderError::InvalidTool(format!(
                "Duplicate tool name: {}",
                tool.name
            )));
        }
    }
    Ok(())
}

pub fn is_valid_function_name(name: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.\-]{0,63}$").unwrap();
    re.is_match(name)
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Turn a non-success status and body into a [`ProviderError`].
pub fn check_gemini_error(status: u16, body: &str) -> ProviderError {
    if status == 429 || status >= 500 {
        return ProviderError::Server { status };
    }

    let message = match serde_json::from_str::<GeminiError>(body) {
        Ok(GeminiError { error }) => match error.status {
            Some(code) => format!("{}: {}", code, error.message),
            None => error.message,
        },
        Err(_) => body.to_string(),
    };
    ProviderError::Request { status, message }
}
