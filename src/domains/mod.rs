//! Domains module containing business logic organized by bounded contexts.

pub mod prompts;
pub mod resend;
pub mod scheduling;
pub mod tools;
