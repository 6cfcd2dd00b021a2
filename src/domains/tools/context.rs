//! Shared state handed to every tool.

use std::sync::Arc;

use super::error::ToolError;
use crate::core::config::Config;
use crate::domains::resend::ResendClient;

/// Everything a tool needs besides its own parameters.
///
/// Built once per server; cloning shares the configuration and the HTTP
/// connection pool.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub client: ResendClient,
}

impl ToolContext {
    /// Create a context whose client targets the configured Resend base URL.
    pub fn new(config: Arc<Config>) -> Self {
        let client = ResendClient::new(config.resend.base_url.clone());
        Self { config, client }
    }

    /// Pick the API key for a call.
    ///
    /// A key supplied with the request (the `resend-api-key` header on the
    /// HTTP transport) wins over the configured one.
    pub fn api_key(&self, request_key: Option<&str>) -> Result<String, ToolError> {
        request_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or_else(|| self.config.credentials.resend_api_key.as_deref())
            .map(str::to_string)
            .ok_or(ToolError::MissingCredential)
    }

    /// Sender used when a tool call does not name one.
    pub fn default_from(&self) -> &str {
        &self.config.resend.default_from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(configured: Option<&str>) -> ToolContext {
        let mut config = Config::default();
        config.credentials.resend_api_key = configured.map(str::to_string);
        ToolContext::new(Arc::new(config))
    }

    #[test]
    fn test_request_key_wins() {
        let ctx = context(Some("re_config"));
        assert_eq!(ctx.api_key(Some("re_header")).unwrap(), "re_header");
    }

    #[test]
    fn test_falls_back_to_configured_key() {
        let ctx = context(Some("re_config"));
        assert_eq!(ctx.api_key(None).unwrap(), "re_config");
        assert_eq!(ctx.api_key(Some("  ")).unwrap(), "re_config");
    }

    #[test]
    fn test_missing_key() {
        let ctx = context(None);
        assert!(matches!(ctx.api_key(None), Err(ToolError::MissingCredential)));
    }
}
