use serde::{Deserialize, Serialize};

use super::types::message::Turn;
use super::types::response::GenerateContentResponse;
use super::types::tool::FunctionDeclaration;
use crate::errors::ProviderError;

/// Token accounting as reported in `usageMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(rename = "promptTokenCount", default)]
    pub input_tokens: Option<i32>,
    #[serde(rename = "candidatesTokenCount", default)]
    pub output_tokens: Option<i32>,
    #[serde(rename = "totalTokenCount", default)]
    pub total_tokens: Option<i32>,
}

/// Per-request settings sent alongside the history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateContentConfig {
    pub system_instruction: String,
    pub tools: Vec<FunctionDeclaration>,
}

/// Base trait for remote model clients.
///
/// Calls are blocking; one call is in flight per agent at a time.
pub trait Provider: Send + Sync {
    /// Generate the model's next turn for the given history.
    fn generate_content(
        &self,
        model: &str,
        contents: &[Turn],
        config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse, ProviderError>;
}
