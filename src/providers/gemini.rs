use std::time::Duration;

use reqwest::blocking::Client; // we are using blocking API here to make sync calls
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use super::{
    base::{GenerateContentConfig, Provider},
    configs::gemini::GeminiProviderConfig,
    types::{message::Turn, response::GenerateContentResponse},
    utils::{build_request, check_gemini_error},
};
use crate::errors::ProviderError;

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    fn post(&self, model: &str, payload: &Value) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        match status {
            StatusCode::OK => Ok(serde_json::from_str(&body)?),
            status => Err(check_gemini_error(status.as_u16(), &body)),
        }
    }
}

impl Provider for GeminiProvider {
    fn generate_content(
        &self,
        model: &str,
        contents: &[Turn],
        config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let payload = build_request(contents, config)?;

        debug!(
            model,
            turns = contents.len(),
            tools = config.tools.len(),
            "sending generateContent request"
        );
        let response = self.post(model, &payload)?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                input_tokens = ?usage.input_tokens,
                output_tokens = ?usage.output_tokens,
                total_tokens = ?usage.total_tokens,
                "received generateContent response"
            );
        }

        Ok(response)
    }
}
