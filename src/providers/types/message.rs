use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::content::{FunctionCall, FunctionResponse, Part};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

fn default_role() -> Role {
    Role::Model
}

/// One message of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn new(role: Role, parts: Vec<Part>) -> Result<Self> {
        let turn = Self { role, parts };
        turn.validate()?;
        Ok(turn)
    }

    fn validate(&self) -> Result<()> {
        if self.parts.is_empty() {
            return Err(anyhow!("A turn must include at least one part"));
        }
        match self.role {
            Role::User => {
                if self.has_function_call() {
                    return Err(anyhow!("User turn does not support FunctionCall"));
                }
            }
            Role::Model => {
                if self.has_function_response() {
                    return Err(anyhow!("Model turn does not support FunctionResponse"));
                }
            }
        }
        Ok(())
    }

    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
        }
    }

    pub fn model<S: Into<String>>(text: S) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }

    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn function_calls(&self) -> Vec<FunctionCall> {
        self.parts
            .iter()
            .filter_map(|part| part.as_function_call().cloned())
            .collect()
    }

    pub fn function_responses(&self) -> Vec<FunctionResponse> {
        self.parts
            .iter()
            .filter_map(|part| part.as_function_response().cloned())
            .collect()
    }

    pub fn has_function_call(&self) -> bool {
        self.parts.iter().any(|p| p.as_function_call().is_some())
    }

    fn has_function_response(&self) -> bool {
        self.parts.iter().any(|p| p.as_function_response().is_some())
    }
}
