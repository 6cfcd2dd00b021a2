//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Used by the STDIO transport. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{ListEmailsTool, ScheduleEmailAdvancedTool, SendEmailTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SendEmailTool::create_route(ctx.clone()))
        .with_route(ScheduleEmailAdvancedTool::create_route(ctx.clone()))
        .with_route(ListEmailsTool::create_route(ctx))
}
