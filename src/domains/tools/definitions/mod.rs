//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod emails;

pub use emails::{
    ListEmailsParams, ListEmailsTool, ScheduleEmailAdvancedTool, ScheduleEmailParams,
    SendEmailParams, SendEmailTool,
};
