//! Resend API domain module.
//!
//! A small async client for the parts of the Resend HTTP API the tools use:
//! sending (optionally scheduled) emails and listing sent emails.
//!
//! Every call is a single request. Nothing is retried; failures are returned
//! to the caller with the API's error body intact.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, ResendClient};
pub use error::ResendError;
pub use types::{EmailRecord, ListEmailsResponse, SendEmailRequest, SendEmailResponse};
