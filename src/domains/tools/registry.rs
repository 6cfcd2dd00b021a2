//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::context::ToolContext;
use super::definitions::{ListEmailsTool, ScheduleEmailAdvancedTool, SendEmailTool};

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    context: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Shared state handed to every tool.
    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SendEmailTool::NAME,
            ScheduleEmailAdvancedTool::NAME,
            ListEmailsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both transports list tools from here.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SendEmailTool::to_tool(),
            ScheduleEmailAdvancedTool::to_tool(),
            ListEmailsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// `api_key` is the `resend-api-key` header of the request, if any.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        api_key: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        let ctx = &self.context;
        match name {
            SendEmailTool::NAME => SendEmailTool::http_handler(arguments, ctx, api_key).await,
            ScheduleEmailAdvancedTool::NAME => {
                ScheduleEmailAdvancedTool::http_handler(arguments, ctx, api_key).await
            }
            ListEmailsTool::NAME => ListEmailsTool::http_handler(arguments, ctx, api_key).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(ToolContext::new(Arc::new(Config::default())))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names, vec!["send-email", "schedule-email-advanced", "list-emails"]);
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(tool.annotations.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_without_key() {
        let registry = test_registry();
        let result = registry
            .call_tool("list-emails", serde_json::json!({}), None)
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_params() {
        let registry = test_registry();
        let result = registry
            .call_tool("send-email", serde_json::json!({ "to": 42 }), Some("re_test"))
            .await;
        assert!(result.unwrap_err().starts_with("Invalid parameters"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({}), None).await;
        assert_eq!(result.unwrap_err(), "Unknown tool: unknown");
    }
}
