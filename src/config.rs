//! Agent configuration resolved from the environment.
//!
//! The configuration is built once at program start and handed by reference to
//! whatever needs it; nothing here is global.
use std::path::Path;

use tracing::debug;

use crate::errors::ConfigError;
use crate::providers::configs::base::get_env;
use crate::providers::configs::{GeminiProviderConfig, ProviderConfig};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MAX_TURNS: usize = 10;

#[derive(Debug, Clone)]
pub struct AgentConfiguration {
    provider: GeminiProviderConfig,
    model: String,
    max_turns: usize,
}

impl AgentConfiguration {
    /// Load `.env` from the working directory, if any, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_env()
    }

    /// Like [`AgentConfiguration::load`], but first loads the given env file when it exists.
    ///
    /// Variables already present in the process environment are never overridden.
    pub fn load_with_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("Loaded environment from {}", path.display());
        }
        Self::load()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = GeminiProviderConfig::from_env()?;

        let model = get_env("GEMINI_MODEL")?
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_turns = match get_env("GEMINI_MAX_TURNS")? {
            Some(value) => parse_max_turns(&value)?,
            None => DEFAULT_MAX_TURNS,
        };

        Ok(Self {
            provider,
            model,
            max_turns,
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.provider.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn provider_config(&self) -> &GeminiProviderConfig {
        &self.provider
    }
}

fn parse_max_turns(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(turns) if turns > 0 => Ok(turns),
        _ => Err(ConfigError::Invalid {
            key: "GEMINI_MAX_TURNS".to_string(),
            value: value.to_string(),
        }),
    }
}
