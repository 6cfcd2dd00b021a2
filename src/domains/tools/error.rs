//! Tool-specific error types.

use thiserror::Error;

use crate::domains::resend::ResendError;
use crate::domains::scheduling::ScheduleError;

/// Errors that can occur during tool operations.
///
/// Display strings are shown to the end user as the tool result text.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No Resend API key was supplied with the request or configured.
    #[error("API key is required. Please provide resend-api-key header.")]
    MissingCredential,

    /// The scheduling parameters were rejected.
    #[error("Scheduling validation failed: {0}")]
    Schedule(#[from] ScheduleError),

    /// The Resend API call failed.
    #[error("{context}: {source}")]
    Delivery {
        context: String,
        #[source]
        source: ResendError,
    },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Wrap a Resend failure for the given action ("send", "schedule", "list").
    ///
    /// API errors read "Email failed to <action>: {body}", transport errors
    /// read "Failed to <action> email: {error}".
    pub fn delivery(action: &str, source: ResendError) -> Self {
        let context = match (&source, action) {
            (_, "list") => "Failed to list emails".to_string(),
            (ResendError::Api { .. }, _) => format!("Email failed to {action}"),
            _ => format!("Failed to {action} email"),
        };
        Self::Delivery { context, source }
    }
}
