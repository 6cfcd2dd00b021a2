//! Scheduling domain module.
//!
//! Turns a caller's "send this email later" intent into a value the Resend API
//! accepts, or rejects it before any network call is made.
//!
//! ## Architecture
//!
//! - `request.rs` - Scheduling modes, requests and normalized results
//! - `validator.rs` - The `normalize` operation
//! - `patterns.rs` - Recognizable temporal phrasings
//! - `error.rs` - Validation errors
//!
//! The reference instant ("now") is always passed in by the caller, which
//! keeps `normalize` a pure function.

mod error;
mod patterns;
mod request;
mod validator;

pub use error::ScheduleError;
pub use request::{NormalizedSchedule, ScheduleMode, ScheduleRequest, ScheduleWarning};
pub use validator::{MAX_LOOKAHEAD_DAYS, normalize};
