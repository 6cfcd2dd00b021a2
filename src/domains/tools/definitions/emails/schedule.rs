//! Advanced scheduling tool definition.

use chrono::{DateTime, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use super::common::{EmailContent, annotations, error_result, success_result};
use crate::domains::resend::SendEmailRequest;
use crate::domains::scheduling::{NormalizedSchedule, ScheduleRequest, normalize};
use crate::domains::tools::{ToolContext, ToolError};

/// Parameters for the schedule-email-advanced tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEmailParams {
    #[serde(flatten)]
    pub email: EmailContent,

    /// Scheduling method: natural_language, iso_date or relative_time
    pub scheduling_option: String,

    /// Schedule value based on the scheduling option: natural language (e.g. 'tomorrow at 10am'), ISO date (e.g. '2024-12-25T10:00:00Z') or relative time (e.g. 'in 2 hours')
    pub schedule_value: String,

    /// Timezone for natural language scheduling (e.g., 'America/New_York', 'Europe/London')
    #[serde(default)]
    pub timezone: Option<String>,
}

impl ScheduleEmailParams {
    /// Validate the parameters and build the Resend request.
    pub fn build_request(
        &self,
        default_from: &str,
        now: DateTime<Utc>,
    ) -> Result<(SendEmailRequest, NormalizedSchedule), ToolError> {
        self.email.validate()?;

        let request = ScheduleRequest::from_tag(
            &self.scheduling_option,
            self.schedule_value.as_str(),
            self.timezone.clone(),
        )?;
        let schedule = normalize(&request, now)?;

        let request = self
            .email
            .to_request(default_from, Some(schedule.value.clone()));
        Ok((request, schedule))
    }
}

/// Schedule email tool with explicit scheduling modes and validation.
pub struct ScheduleEmailAdvancedTool;

impl ScheduleEmailAdvancedTool {
    pub const NAME: &'static str = "schedule-email-advanced";

    pub const DESCRIPTION: &'static str = "Schedule an email with advanced scheduling options and validation. \
        Provides better control over timing and timezone handling.";

    #[instrument(skip_all, fields(to = %params.email.to, option = %params.scheduling_option))]
    pub async fn execute(
        params: &ScheduleEmailParams,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> CallToolResult {
        info!("Schedule email tool called");

        match Self::schedule(params, ctx, request_key, Utc::now()).await {
            Ok(summary) => success_result(summary),
            Err(e) => {
                error!("Schedule email failed: {}", e);
                error_result(&e)
            }
        }
    }

    async fn schedule(
        params: &ScheduleEmailParams,
        ctx: &ToolContext,
        request_key: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, ToolError> {
        let api_key = ctx.api_key(request_key)?;
        let (request, schedule) = params.build_request(ctx.default_from(), now)?;

        info!("Scheduling email for {} ({})", schedule.value, schedule.mode);

        let response = ctx
            .client
            .send_email(&api_key, &request)
            .await
            .map_err(|e| ToolError::delivery("schedule", e))?;

        let mut summary = format!(
            "Email scheduled successfully!\nEmail ID: {}\nScheduled for: {}\nRecipient: {}\nSubject: {}",
            response.id, schedule.value, request.to, request.subject
        );
        if let Some(warning) = &schedule.warning {
            warn!("{}", warning);
            summary.push_str(&format!("\nWarning: {warning}"));
        }

        Ok(summary)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        ctx: &ToolContext,
        request_key: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        let params: ScheduleEmailParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        let result = Self::execute(&params, ctx, request_key).await;
        Ok(super::common::to_http_value(result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ScheduleEmailParams>(),
            annotations: Some(annotations("Schedule Email (Advanced)", false, false, false)),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Schedule Email (Advanced)".into()),
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
                let params: ScheduleEmailParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &ctx, None).await)
            }
            .boxed()
        })
    }
}
