use std::path::PathBuf;

use thiserror::Error;

/// Raised while resolving the agent configuration. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY not found in environment variables. \
         Please set it in your .env file. \
         Get your API key from: https://aistudio.google.com/api-keys"
    )]
    MissingApiKey,

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },

    #[error("Environment variable '{0}' is not valid unicode")]
    NotUnicode(String),

    #[error("Failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
}

/// Failures talking to the remote model.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("Request failed: {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Model returned no content (finish reason: {})", .finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyResponse { finish_reason: Option<String> },

    #[error("Invalid tool declaration: {0}")]
    InvalidTool(String),
}

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool {name} failed: {source}")]
    Tool {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("No final answer after {0} model turns")]
    TurnLimitExceeded(usize),
}

pub type AgentResult<T> = Result<T, AgentError>;
