//! List emails tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::common::{annotations, error_result, success_result};
use crate::domains::resend::{EmailRecord, ListEmailsResponse};
use crate::domains::tools::{ToolContext, ToolError};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// Parameters for the list-emails tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListEmailsParams {
    /// Number of emails to retrieve (default: 20, max: 100)
    #[serde(default)]
    pub limit: Option<u32>,

    /// Number of emails to skip for pagination (default: 0)
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListEmailsParams {
    /// Resolve `(limit, offset)` with defaults applied.
    pub fn page(&self) -> Result<(u32, u32), ToolError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ToolError::invalid_arguments(format!(
                "'limit' must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        Ok((limit, self.offset.unwrap_or(0)))
    }
}

/// Condensed view of an email, as listed to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmailSummary {
    pub id: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

impl From<EmailRecord> for EmailSummary {
    fn from(record: EmailRecord) -> Self {
        Self {
            id: record.id,
            to: record.to,
            subject: record.subject,
            created_at: record.created_at,
            last_event: record.last_event,
            scheduled_at: record.scheduled_at,
        }
    }
}

/// Render the listing text shown to the client.
pub fn format_listing(response: ListEmailsResponse) -> Result<String, ToolError> {
    let total = response
        .total
        .unwrap_or(response.data.len() as u64);
    let summaries: Vec<EmailSummary> = response.data.into_iter().map(EmailSummary::from).collect();
    let json = serde_json::to_string_pretty(&summaries)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    Ok(format!(
        "Emails retrieved successfully! Total: {total}\n\nEmails:\n{json}"
    ))
}

/// List emails tool - reads sent and scheduled emails from the account.
pub struct ListEmailsTool;

impl ListEmailsTool {
    pub const NAME: &'static str = "list-emails";

    pub const DESCRIPTION: &'static str =
        "List emails from your Resend account, including sent and scheduled emails";

    #[instrument(skip_all, fields(limit = ?params.limit, offset = ?params.offset))]
    pub async fn execute(
        params: &ListEmailsParams,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> CallToolResult {
        info!("List emails tool called");

        let result = async {
            let api_key = ctx.api_key(request_key)?;
            let (limit, offset) = params.page()?;
            debug!("Listing emails: limit={}, offset={}", limit, offset);

            let response = ctx
                .client
                .list_emails(&api_key, limit, offset)
                .await
                .map_err(|e| ToolError::delivery("list", e))?;
            format_listing(response)
        }
        .await;

        match result {
            Ok(text) => success_result(text),
            Err(e) => {
                error!("List emails failed: {}", e);
                error_result(&e)
            }
        }
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        let params: ListEmailsParams = if arguments.is_null() {
            ListEmailsParams::default()
        } else {
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?
        };

        let result = Self::execute(&params, ctx, request_key).await;
        Ok(super::common::to_http_value(result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListEmailsParams>(),
            annotations: Some(annotations("List Emails", true, false, true)),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("List Emails".into()),
        }
    }

    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                let params: ListEmailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &ctx, None).await)
            }
            .boxed()
        })
    }
}
