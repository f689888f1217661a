//! Credentials and API endpoint configuration.

use std::env;
use std::time::Duration;

use crate::error::{XbotError, XbotResult};

/// OAuth credentials for the X API, read from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth 1.0a Consumer Key (API Key)
    pub api_key: String,

    /// OAuth 1.0a Consumer Secret (API Secret)
    pub api_secret_key: String,

    /// OAuth 2.0 Bearer Token (app-only auth, optional)
    pub bearer_token: Option<String>,

    /// OAuth 1.0a Access Token
    pub access_token: String,

    /// OAuth 1.0a Access Token Secret
    pub access_token_secret: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first required variable
    /// that is missing or empty.
    pub fn from_env() -> XbotResult<Self> {
        Ok(Self {
            api_key: require_var("API_KEY")?,
            api_secret_key: require_var("API_SECRET_KEY")?,
            bearer_token: env::var("BEARER_TOKEN").ok().filter(|v| !v.trim().is_empty()),
            access_token: require_var("ACCESS_TOKEN")?,
            access_token_secret: require_var("ACCESS_TOKEN_SECRET")?,
        })
    }
}

fn require_var(name: &str) -> XbotResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(XbotError::Config(format!(
            "environment variable {name} is required"
        ))),
    }
}

/// Endpoint configuration for the X API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API v2 (default: https://api.twitter.com)
    pub api_url: String,

    /// Upload URL for v1.1 media uploads (default: https://upload.twitter.com)
    pub upload_url: String,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.twitter.com".into(),
            upload_url: "https://upload.twitter.com".into(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_twitter() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url, "https://api.twitter.com");
        assert_eq!(config.upload_url, "https://upload.twitter.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn require_var_rejects_empty() {
        // Var names chosen to avoid colliding with real credentials.
        env::set_var("XBOT_TEST_EMPTY_VAR", "   ");
        assert!(require_var("XBOT_TEST_EMPTY_VAR").is_err());
        assert!(require_var("XBOT_TEST_UNSET_VAR").is_err());

        env::set_var("XBOT_TEST_SET_VAR", "value");
        assert_eq!(require_var("XBOT_TEST_SET_VAR").unwrap(), "value");
    }
}
