//! Configuration management for the MCP server.
//!
//! Configuration is built from defaults and `MCP_` prefixed environment
//! variables (a `.env` file is loaded first when present).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::resend::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Sender used when a tool call omits `from`.
pub const DEFAULT_FROM: &str = "Resend MCP <onboarding@resend.dev>";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Resend API endpoint and sender defaults.
    pub resend: ResendConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Resend API key used when a request does not carry its own.
    /// Create one at: https://resend.com/api-keys
    pub resend_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Resend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendConfig {
    /// API base URL, without trailing slash.
    pub base_url: String,

    /// Sender used when a tool call omits `from`.
    pub default_from: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_from: DEFAULT_FROM.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "resend-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            resend: ResendConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_LOG_TIMESTAMPS`,
    /// `MCP_TRANSPORT` and the `MCP_HTTP_*` family, `MCP_RESEND_API_KEY`
    /// (or `RESEND_API_KEY`), `MCP_RESEND_BASE_URL`, `MCP_RESEND_DEFAULT_FROM`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        let api_key = std::env::var("MCP_RESEND_API_KEY")
            .or_else(|_| std::env::var("RESEND_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_some() {
            info!("Resend API key loaded from environment");
        } else {
            warn!(
                "No Resend API key configured. Set RESEND_API_KEY, or send a \
                 resend-api-key header with each HTTP request"
            );
        }
        config.credentials.resend_api_key = api_key;

        if let Ok(base_url) = std::env::var("MCP_RESEND_BASE_URL") {
            config.resend.base_url = base_url.trim_end_matches('/').to_string();
            info!("Using Resend API at {}", config.resend.base_url);
        }

        if let Ok(from) = std::env::var("MCP_RESEND_DEFAULT_FROM") {
            config.resend.default_from = from;
        }

        config
    }

    /// Check values that would otherwise only fail on the first tool call.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.resend.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::config(format!(
                "Resend base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        if !self.resend.default_from.contains('@') {
            return Err(Error::config(format!(
                "Default sender must contain an email address, got '{}'",
                self.resend.default_from
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_resend_env() {
        unsafe {
            std::env::remove_var("MCP_RESEND_API_KEY");
            std::env::remove_var("RESEND_API_KEY");
            std::env::remove_var("MCP_RESEND_BASE_URL");
            std::env::remove_var("MCP_RESEND_DEFAULT_FROM");
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_resend_env();
        unsafe {
            std::env::set_var("RESEND_API_KEY", "re_plain");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.resend_api_key.as_deref(), Some("re_plain"));

        unsafe {
            std::env::set_var("MCP_RESEND_API_KEY", "re_prefixed");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.resend_api_key.as_deref(),
            Some("re_prefixed")
        );
        clear_resend_env();
    }

    #[test]
    fn test_credentials_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_resend_env();
        let config = Config::from_env();
        assert!(config.credentials.resend_api_key.is_none());
    }

    #[test]
    fn test_resend_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_resend_env();
        unsafe {
            std::env::set_var("MCP_RESEND_BASE_URL", "http://localhost:4010/");
            std::env::set_var("MCP_RESEND_DEFAULT_FROM", "Acme <hello@acme.dev>");
        }
        let config = Config::from_env();
        assert_eq!(config.resend.base_url, "http://localhost:4010");
        assert_eq!(config.resend.default_from, "Acme <hello@acme.dev>");
        assert_ok!(config.validate());
        clear_resend_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            resend_api_key: Some("re_super_secret".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("re_super_secret"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.credentials.resend_api_key.is_none());
        assert_eq!(config.resend.base_url, "https://api.resend.com");
        assert_eq!(config.resend.default_from, DEFAULT_FROM);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.resend.base_url = "api.resend.com".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.resend.default_from = "Resend MCP".to_string();
        assert_err!(config.validate());
    }
}
