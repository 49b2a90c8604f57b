use std::env;

use crate::errors::ConfigError;

pub trait ProviderConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self, ConfigError>
    where
        Self: Sized;
}

/// Read an optional environment variable. A value that is not valid unicode is an error.
pub fn get_env(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_env_present_and_absent() {
        env::set_var("ADK_TEST_GET_ENV", "value");
        let value = get_env("ADK_TEST_GET_ENV").unwrap();
        assert_eq!(value.as_deref(), Some("value"));

        env::remove_var("ADK_TEST_GET_ENV");
        assert_eq!(get_env("ADK_TEST_GET_ENV").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_get_env_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("ADK_TEST_GET_ENV", OsStr::from_bytes(&[0x66, 0x6f, 0x80]));
        let err = get_env("ADK_TEST_GET_ENV").unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode(key) if key == "ADK_TEST_GET_ENV"));
        env::remove_var("ADK_TEST_GET_ENV");
    }
}
