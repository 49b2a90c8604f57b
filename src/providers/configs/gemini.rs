use std::fmt;

use super::base::{get_env, ProviderConfig};
use crate::errors::ConfigError;

pub const GEMINI_API_HOST: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
pub struct GeminiProviderConfig {
    pub api_key: String,
    pub host: String,
}

impl GeminiProviderConfig {
    pub fn new(api_key: String, host: String) -> Self {
        Self { api_key, host }
    }
}

impl fmt::Debug for GeminiProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProviderConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

impl ProviderConfig for GeminiProviderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // An empty key is as useless as a missing one
        let api_key = get_env("GEMINI_API_KEY")?
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let host = get_env("GEMINI_API_HOST")?
            .unwrap_or_else(|| GEMINI_API_HOST.to_string());

        Ok(Self::new(api_key, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_from_env_requires_key() {
        env::remove_var("GEMINI_API_KEY");
        let err = GeminiProviderConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        env::set_var("GEMINI_API_KEY", "  ");
        let err = GeminiProviderConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    #[serial]
    fn test_from_env_default_host() {
        env::set_var("GEMINI_API_KEY", "test_key");
        env::remove_var("GEMINI_API_HOST");

        let config = GeminiProviderConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test_key");
        assert_eq!(config.host, GEMINI_API_HOST);

        env::remove_var("GEMINI_API_KEY");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiProviderConfig::new("secret".to_string(), GEMINI_API_HOST.to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
