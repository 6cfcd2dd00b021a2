//! Resend client error types.

use thiserror::Error;

/// Errors returned by [`ResendClient`](super::ResendClient).
#[derive(Debug, Error)]
pub enum ResendError {
    /// The API answered with a non-success status.
    ///
    /// `body` is the error object returned by Resend (normally
    /// `{"statusCode":…,"name":…,"message":…}`), kept as received.
    #[error("{body}")]
    Api { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ResendError {
    /// Create an API error from a status and raw body.
    ///
    /// JSON bodies are re-serialized compactly; anything else is kept as text.
    pub fn api(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(raw_body)
            .map(|v| v.to_string())
            .unwrap_or_else(|_| {
                if raw_body.trim().is_empty() {
                    format!("{{\"statusCode\":{status},\"message\":\"empty response body\"}}")
                } else {
                    raw_body.to_string()
                }
            });
        Self::Api { status, body }
    }

    /// Whether the error came back from the API itself (as opposed to transport).
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_json_body() {
        let err = ResendError::api(
            422,
            r#"{ "statusCode": 422, "name": "validation_error", "message": "Invalid `to` field" }"#,
        );
        assert!(err.is_api_error());
        let body: serde_json::Value = serde_json::from_str(&err.to_string()).unwrap();
        assert_eq!(body["name"], "validation_error");
        assert_eq!(body["statusCode"], 422);
        assert!(!err.to_string().contains('\n'));
    }

    #[test]
    fn test_api_error_plain_text_body() {
        let err = ResendError::api(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn test_api_error_empty_body() {
        let err = ResendError::api(500, "");
        assert!(err.to_string().contains("500"));
    }
}
