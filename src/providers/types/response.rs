use serde::{Deserialize, Serialize};

use super::content::FunctionCall;
use super::message::Turn;
use crate::errors::ProviderError;
use crate::providers::base::Usage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Turn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The reply to one `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// A single-candidate reply with the given turn, mostly useful for scripting.
    pub fn from_turn(turn: Turn) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(turn),
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
            model_version: None,
        }
    }

    /// The turn the conversation continues with: the first candidate's content.
    pub fn turn(&self) -> Option<&Turn> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .filter(|turn| !turn.parts.is_empty())
    }

    /// Like [`GenerateContentResponse::turn`], but an empty reply is an error.
    pub fn require_turn(&self) -> Result<&Turn, ProviderError> {
        self.turn().ok_or_else(|| ProviderError::EmptyResponse {
            finish_reason: self.finish_reason().map(str::to_string),
        })
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
    }

    /// Final answer text; empty when the model only asked for function calls.
    pub fn text(&self) -> String {
        self.turn().map(Turn::text).unwrap_or_default()
    }

    pub fn function_calls(&self) -> Vec<FunctionCall> {
        self.turn().map(Turn::function_calls).unwrap_or_default()
    }

    pub fn has_function_calls(&self) -> bool {
        self.turn().is_some_and(Turn::has_function_call)
    }
}
