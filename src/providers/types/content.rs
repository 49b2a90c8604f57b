use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A function call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "empty_args")]
    pub args: Value,
}

fn empty_args() -> Value {
    Value::Object(Map::new())
}

impl FunctionCall {
    pub fn new<S: Into<String>>(name: S, args: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            args,
        }
    }
}

/// The result of a local function, sent back to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub response: Value,
}

impl FunctionResponse {
    /// A successful result, wrapped as `{"result": value}`.
    pub fn result(call: &FunctionCall, value: Value) -> Self {
        Self {
            id: call.id.clone(),
            name: call.name.clone(),
            response: serde_json::json!({ "result": value }),
        }
    }

    /// A failed call, reported as `{"error": message}` so the model can react.
    pub fn error(call: &FunctionCall, message: impl Into<String>) -> Self {
        Self {
            id: call.id.clone(),
            name: call.name.clone(),
            response: serde_json::json!({ "error": message.into() }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.response.get("error").is_some()
    }
}

/// One atomic piece of a turn.
///
/// Variant order matters for deserialization: the first shape that fits wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
        #[serde(
            default,
            rename = "thoughtSignature",
            skip_serializing_if = "Option::is_none"
        )]
        thought_signature: Option<String>,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
        #[serde(
            default,
            rename = "thoughtSignature",
            skip_serializing_if = "Option::is_none"
        )]
        thought_signature: Option<String>,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
}

impl Part {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Part::Text {
            text: text.into(),
            thought: None,
            thought_signature: None,
        }
    }

    pub fn function_call(call: FunctionCall) -> Self {
        Part::FunctionCall {
            function_call: call,
            thought_signature: None,
        }
    }

    pub fn function_response(response: FunctionResponse) -> Self {
        Part::FunctionResponse {
            function_response: response,
        }
    }

    /// Plain answer text, excluding model thoughts.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text, thought, .. } if *thought != Some(true) => Some(text),
            _ => None,
        }
    }

    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Part::FunctionCall { function_call, .. } => Some(function_call),
            _ => None,
        }
    }

    pub fn as_function_response(&self) -> Option<&FunctionResponse> {
        match self {
            Part::FunctionResponse { function_response } => Some(function_response),
            _ => None,
        }
    }
}
