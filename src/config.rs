//! Configuration management for the site backend.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Default upstream chat-completion base URL.
pub const DEFAULT_CHAT_API_URL: &str = "https://api.openai.com/v1";

/// Default upstream model identifier.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Variable holding the upstream bearer credential. Re-read on every request.
pub const CHAT_API_KEY_VAR: &str = "CHAT_API_KEY";

/// Variable holding the video asset base URL. Re-read on every lookup.
pub const VIDEO_BASE_URL_VAR: &str = "VIDEO_BASE_URL";

/// Configuration for the site backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream chat-completion base URL
    pub chat_api_url: String,

    /// Bearer credential for the upstream API. Not validated; an empty key
    /// lets the request proceed and fail upstream.
    pub chat_api_key: String,

    /// Application identifier sent alongside the credential
    pub chat_app_id: String,

    /// Model identifier sent with every completion request
    pub chat_model: String,

    /// Upstream request timeout in seconds (unset: HTTP client default)
    pub request_timeout: Option<u64>,

    /// Base URL that video asset names are resolved against
    pub video_base_url: String,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CHAT_API_BASE_URL`: Upstream base URL (default: `https://api.openai.com/v1`)
    /// - `CHAT_API_KEY`: Upstream bearer credential (default: empty)
    /// - `CHAT_APP_ID`: Application identifier header value (default: empty)
    /// - `CHAT_MODEL`: Upstream model (default: `gpt-4o-mini`)
    /// - `REQUEST_TIMEOUT`: Upstream timeout in seconds (default: none)
    /// - `VIDEO_BASE_URL`: Video asset base URL (default: empty)
    /// - `BIND_ADDR`: Listen address (default: `127.0.0.1:3000`)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let chat_api_url =
            env::var("CHAT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_CHAT_API_URL.to_string());

        // Validate API URL format
        if !is_http_url(&chat_api_url) {
            return Err(ConfigError::InvalidValue {
                var: "CHAT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let chat_api_key = env::var(CHAT_API_KEY_VAR).unwrap_or_default();
        let chat_app_id = env::var("CHAT_APP_ID").unwrap_or_default();
        let chat_model =
            env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let request_timeout = Self::parse_env_opt_u64("REQUEST_TIMEOUT")?;

        let video_base_url = env::var(VIDEO_BASE_URL_VAR).unwrap_or_default();
        if !video_base_url.is_empty() && !is_http_url(&video_base_url) {
            return Err(ConfigError::InvalidValue {
                var: VIDEO_BASE_URL_VAR.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let bind_addr = Self::parse_env_addr("BIND_ADDR", DEFAULT_BIND_ADDR)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            chat_api_url,
            chat_api_key,
            chat_app_id,
            chat_model,
            request_timeout,
            video_base_url,
            bind_addr,
            log_level,
        })
    }

    /// Resolve a video asset name against the base URL.
    ///
    /// The environment is consulted on each call so the base URL can change
    /// without a restart; a value that is not an http(s) URL is ignored in
    /// favor of the one loaded at startup. Returns `None` when neither is set.
    pub fn video_url(&self, name: &str) -> Option<String> {
        let base = match env::var(VIDEO_BASE_URL_VAR) {
            Ok(val) if is_http_url(&val) => val,
            _ => self.video_base_url.clone(),
        };
        if base.is_empty() {
            return None;
        }
        let base = base.trim_end_matches('/');
        let name = name.trim_start_matches('/');
        Some(format!("{}/{}", base, name))
    }

    /// Parse an optional environment variable as u64.
    fn parse_env_opt_u64(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let val = env::var(var_name).unwrap_or_else(|_| default.to_string());
        val.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:3000, got: {}", val),
            })
    }
}

/// Current value of `var`, or `fallback` when it is unset.
pub fn env_or(var: &str, fallback: &str) -> String {
    env::var(var).unwrap_or_else(|_| fallback.to_string())
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_api_key: String::new(),
            chat_app_id: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            request_timeout: None,
            video_base_url: String::new(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "CHAT_API_BASE_URL",
        "CHAT_API_KEY",
        "CHAT_APP_ID",
        "CHAT_MODEL",
        "REQUEST_TIMEOUT",
        "VIDEO_BASE_URL",
        "BIND_ADDR",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate for every variable the config reads.
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.chat_api_url, DEFAULT_CHAT_API_URL);
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert!(config.chat_api_key.is_empty());
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_key_is_allowed() {
        let mut guard = EnvGuard::new();
        guard.set("CHAT_API_KEY", "");

        let config = Config::from_env().unwrap();
        assert!(config.chat_api_key.is_empty());
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("CHAT_API_BASE_URL", "not-a-url");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CHAT_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_video_url() {
        let mut guard = EnvGuard::new();
        guard.set("VIDEO_BASE_URL", "cdn.example.com");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "VIDEO_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_bind_addr() {
        let mut guard = EnvGuard::new();
        guard.set("BIND_ADDR", "localhost");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BIND_ADDR"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CHAT_API_BASE_URL", "https://llm.example.com/v1");
        guard.set("CHAT_API_KEY", "test-key-123");
        guard.set("CHAT_APP_ID", "site");
        guard.set("REQUEST_TIMEOUT", "15");
        guard.set("BIND_ADDR", "0.0.0.0:8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.chat_api_url, "https://llm.example.com/v1");
        assert_eq!(config.chat_api_key, "test-key-123");
        assert_eq!(config.chat_app_id, "site");
        assert_eq!(config.request_timeout, Some(15));
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    #[serial]
    fn test_parse_env_opt_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_TIMEOUT_INVALID", "not-a-number");

        let result = Config::parse_env_opt_u64("TEST_TIMEOUT_INVALID");
        assert!(result.is_err());
        assert_eq!(Config::parse_env_opt_u64("NONEXISTENT_TIMEOUT").unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_video_url_joins_paths() {
        let _guard = EnvGuard::new();
        let config = Config {
            video_base_url: "https://cdn.example.com/videos/".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.video_url("/intro.mp4").as_deref(),
            Some("https://cdn.example.com/videos/intro.mp4")
        );
    }

    #[test]
    #[serial]
    fn test_video_url_unconfigured() {
        let _guard = EnvGuard::new();
        assert_eq!(Config::default().video_url("intro.mp4"), None);
    }

    #[test]
    #[serial]
    fn test_video_url_follows_environment_after_startup() {
        let mut guard = EnvGuard::new();
        let config = Config::from_env().unwrap();
        assert_eq!(config.video_url("intro.mp4"), None);

        guard.set(VIDEO_BASE_URL_VAR, "https://cdn.example.com/v2");
        assert_eq!(
            config.video_url("intro.mp4").as_deref(),
            Some("https://cdn.example.com/v2/intro.mp4")
        );

        guard.set(VIDEO_BASE_URL_VAR, "not-a-url");
        assert_eq!(config.video_url("intro.mp4"), None);
    }

    #[test]
    #[serial]
    fn test_env_or() {
        let mut guard = EnvGuard::new();
        assert_eq!(env_or(CHAT_API_KEY_VAR, "startup"), "startup");
        guard.set(CHAT_API_KEY_VAR, "rotated");
        assert_eq!(env_or(CHAT_API_KEY_VAR, "startup"), "rotated");
    }
}
