//! Resend MCP Server Library
//!
//! A Model Context Protocol server that sends, schedules and lists emails
//! through the Resend API.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **scheduling**: Validation and normalization of "send later" requests
//!   - **resend**: Async client for the Resend email API
//!   - **tools**: MCP tools (`send-email`, `schedule-email-advanced`, `list-emails`)
//!   - **prompts**: Static setup guides
//!
//! # Example
//!
//! ```rust,no_run
//! use resend_mcp_server::domains::scheduling::{ScheduleRequest, normalize};
//!
//! let request = ScheduleRequest::detect("2030-01-15T10:00:00Z");
//! let result = normalize(&request, chrono::Utc::now());
//! println!("{result:?}");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
