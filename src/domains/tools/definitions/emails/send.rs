//! Send email tool definition.
//!
//! Sends an email right away, or schedules it when `scheduledAt` is given.

use chrono::{DateTime, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use super::common::{EmailContent, annotations, error_result, success_result};
use crate::domains::resend::SendEmailRequest;
use crate::domains::scheduling::{NormalizedSchedule, ScheduleRequest, normalize};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the send-email tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailParams {
    #[serde(flatten)]
    pub email: EmailContent,

    /// Optional parameter to schedule the email. Accepts natural language (e.g., 'tomorrow at 10am EST', 'in 2 hours', 'Friday at 3pm ET') or ISO 8601 date format (e.g., '2024-12-25T10:00:00Z'). Maximum 30 days in advance.
    #[serde(default)]
    pub scheduled_at: Option<String>,

    /// How to read `scheduledAt`: natural_language, iso_date or relative_time. Detected from the value when omitted.
    #[serde(default)]
    pub scheduling_option: Option<String>,

    /// Timezone for a natural-language `scheduledAt` (e.g., "America/New_York").
    #[serde(default)]
    pub timezone: Option<String>,
}

impl SendEmailParams {
    /// Validate the parameters and build the Resend request.
    ///
    /// Returns the normalized schedule alongside the request when the email
    /// is scheduled.
    pub fn build_request(
        &self,
        default_from: &str,
        now: DateTime<Utc>,
    ) -> Result<(SendEmailRequest, Option<NormalizedSchedule>), ToolError> {
        self.email.validate()?;

        let schedule = match self.scheduled_at.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => {
                let request = match &self.scheduling_option {
                    Some(tag) => ScheduleRequest::from_tag(tag, raw, self.timezone.clone())?,
                    None => ScheduleRequest::detect(raw).with_timezone(self.timezone.clone()),
                };
                Some(normalize(&request, now)?)
            }
            None if self.scheduling_option.is_some() => {
                return Err(ToolError::invalid_arguments(
                    "'schedulingOption' requires 'scheduledAt'",
                ));
            }
            None => None,
        };

        let request = self
            .email
            .to_request(default_from, schedule.as_ref().map(|s| s.value.clone()));

        Ok((request, schedule))
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Send email tool - sends or schedules an email through Resend.
pub struct SendEmailTool;

impl SendEmailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send-email";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Send an email using Resend";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(to = %params.email.to, scheduled = params.scheduled_at.is_some()))]
    pub async fn execute(
        params: &SendEmailParams,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> CallToolResult {
        info!("Send email tool called");

        match Self::send(params, ctx, request_key, Utc::now()).await {
            Ok(summary) => {
                info!("Email accepted by Resend");
                success_result(summary)
            }
            Err(e) => {
                error!("Send email failed: {}", e);
                error_result(&e)
            }
        }
    }

    async fn send(
        params: &SendEmailParams,
        ctx: &ToolContext,
        request_key: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, ToolError> {
        let api_key = ctx.api_key(request_key)?;
        let (request, schedule) = params.build_request(ctx.default_from(), now)?;

        let action = if schedule.is_some() { "schedule" } else { "send" };
        debug!(
            "{} email from {}{}",
            if schedule.is_some() { "Scheduling" } else { "Sending" },
            request.from,
            schedule
                .as_ref()
                .map(|s| format!(", scheduled for: {} ({})", s.value, s.mode))
                .unwrap_or_default()
        );

        let response = ctx
            .client
            .send_email(&api_key, &request)
            .await
            .map_err(|e| ToolError::delivery(action, e))?;

        let summary = match &schedule {
            Some(schedule) => {
                let mut summary = format!(
                    "Email scheduled successfully! Email ID: {}\nScheduled for: {}\nRecipient: {}\nSubject: {}",
                    response.id, schedule.value, request.to, request.subject
                );
                if let Some(warning) = &schedule.warning {
                    warn!("{}", warning);
                    summary.push_str(&format!("\nWarning: {warning}"));
                }
                summary
            }
            None => format!(
                "Email sent successfully! {}",
                serde_json::to_string(&response)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?
            ),
        };

        Ok(summary)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        let params: SendEmailParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        let result = Self::execute(&params, ctx, request_key).await;
        Ok(super::common::to_http_value(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SendEmailParams>(),
            annotations: Some(annotations("Send Email", false, false, false)),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Send Email".into()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                let params: SendEmailParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &ctx, None).await)
            }
            .boxed()
        })
    }
}
