//! Common utilities shared across the email tools.
//!
//! This module provides the shared message parameters, address checks,
//! tool annotations and result helpers.

use std::sync::LazyLock;

use regex::Regex;
use rmcp::model::{CallToolResult, Content, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::domains::resend::SendEmailRequest;
use crate::domains::tools::ToolError;

/// Bare address: `local@domain.tld`.
static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>]+$").expect("Invalid email regex")
});

/// Address with display name: `Name <local@domain.tld>`.
static NAMED_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^<>]*<([^\s@<>]+@[^\s@<>]+\.[^\s@<>]+)>$").expect("Invalid named email regex")
});

/// Message fields shared by `send-email` and `schedule-email-advanced`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    /// Recipient email address
    pub to: String,

    /// Email subject line
    pub subject: String,

    /// Plain text email content
    pub text: String,

    /// Sender email address. You MUST ask the user for this parameter. Under no circumstance provide it yourself. If the user doesn't provide a sender email address, you can use `onboarding@resend.dev`
    #[serde(default)]
    pub from: Option<String>,

    /// HTML email content, only do this if you need special formatting or the user asks for it.
    #[serde(default)]
    pub html: Option<String>,

    /// Optional array of CC email addresses. You MUST ask the user for this parameter. Under no circumstance provide it yourself
    #[serde(default)]
    pub cc: Option<Vec<String>>,

    /// Optional array of BCC email addresses. You MUST ask the user for this parameter. Under no circumstance provide it yourself
    #[serde(default)]
    pub bcc: Option<Vec<String>>,

    /// Optional email addresses for the email readers to reply to. You MUST ask the user for this parameter. Under no circumstance provide it yourself
    #[serde(default)]
    pub reply_to: Option<Vec<String>>,
}

impl EmailContent {
    /// Check every address field before anything is sent.
    pub fn validate(&self) -> Result<(), ToolError> {
        check_address("to", &self.to)?;

        if let Some(from) = &self.from {
            if !is_sender(from) {
                return Err(ToolError::invalid_arguments(format!(
                    "'from' must be an email address or 'Name <address>', got '{from}'"
                )));
            }
        }

        for (field, list) in [("cc", &self.cc), ("bcc", &self.bcc), ("replyTo", &self.reply_to)] {
            for address in list.iter().flatten() {
                check_address(field, address)?;
            }
        }

        Ok(())
    }

    /// Build the Resend request body.
    ///
    /// Empty optional fields are dropped so they never reach the API.
    pub fn to_request(&self, default_from: &str, scheduled_at: Option<String>) -> SendEmailRequest {
        SendEmailRequest {
            from: self
                .from
                .clone()
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| default_from.to_string()),
            to: self.to.clone(),
            subject: self.subject.clone(),
            text: self.text.clone(),
            html: self.html.clone().filter(|h| !h.is_empty()),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            reply_to: self.reply_to.clone(),
            scheduled_at,
        }
    }
}

/// Whether `value` is a bare email address.
pub fn is_email_address(value: &str) -> bool {
    EMAIL_ADDRESS.is_match(value.trim())
}

/// Whether `value` is a bare address or `Name <address>`.
pub fn is_sender(value: &str) -> bool {
    let value = value.trim();
    EMAIL_ADDRESS.is_match(value) || NAMED_ADDRESS.is_match(value)
}

fn check_address(field: &str, value: &str) -> Result<(), ToolError> {
    if is_email_address(value) {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(format!(
            "'{field}' must be a valid email address, got '{value}'"
        )))
    }
}

/// Tool annotations as advertised to clients.
pub fn annotations(
    title: &str,
    read_only: bool,
    destructive: bool,
    idempotent: bool,
) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(read_only),
        destructive_hint: Some(destructive),
        idempotent_hint: Some(idempotent),
        open_world_hint: Some(true),
    }
}

/// Create an error result from a tool error.
pub fn error_result(err: &ToolError) -> CallToolResult {
    warn!("{}", err);
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Convert a tool result to the JSON shape returned over HTTP.
#[cfg(feature = "http")]
pub fn to_http_value(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> EmailContent {
        serde_json::from_value(serde_json::json!({
            "to": "user@example.com",
            "subject": "Hello",
            "text": "Hi there"
        }))
        .unwrap()
    }

    #[test]
    fn test_email_address_shapes() {
        assert!(is_email_address("user@example.com"));
        assert!(is_email_address("first.last+tag@sub.example.co.uk"));
        assert!(!is_email_address("user@localhost"));
        assert!(!is_email_address("user example.com"));
        assert!(!is_email_address("Acme <user@example.com>"));

        assert!(is_sender("Acme <onboarding@resend.dev>"));
        assert!(is_sender("onboarding@resend.dev"));
        assert!(!is_sender("Acme"));
    }

    #[test]
    fn test_content_camel_case_fields() {
        let content: EmailContent = serde_json::from_value(serde_json::json!({
            "to": "user@example.com",
            "subject": "s",
            "text": "t",
            "replyTo": ["help@example.com"]
        }))
        .unwrap();
        assert_eq!(content.reply_to, Some(vec!["help@example.com".to_string()]));
    }

    #[test]
    fn test_validate_rejects_bad_cc() {
        let mut content = content();
        content.cc = Some(vec!["ok@example.com".into(), "nope".into()]);
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("'cc'"));
    }

    #[test]
    fn test_to_request_defaults_sender() {
        let request = content().to_request("Resend MCP <onboarding@resend.dev>", None);
        assert_eq!(request.from, "Resend MCP <onboarding@resend.dev>");
        assert_eq!(request.scheduled_at, None);

        let mut custom = content();
        custom.from = Some("me@example.com".into());
        custom.html = Some(String::new());
        let request = custom.to_request("ignored@example.com", Some("in 1 hour".into()));
        assert_eq!(request.from, "me@example.com");
        assert_eq!(request.html, None);
        assert_eq!(request.scheduled_at.as_deref(), Some("in 1 hour"));
    }
}
