//! Email tools backed by the Resend API.

pub mod common;
pub mod list;
pub mod schedule;
pub mod send;

pub use list::{EmailSummary, ListEmailsParams, ListEmailsTool};
pub use schedule::{ScheduleEmailAdvancedTool, ScheduleEmailParams};
pub use send::{SendEmailParams, SendEmailTool};
