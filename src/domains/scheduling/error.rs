//! Scheduling validation errors.

use thiserror::Error;

/// Reasons a scheduling request is rejected.
///
/// Every message is written for the end user: it is shown verbatim in the
/// tool result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The scheduling option tag is not one of the known modes.
    #[error(
        "Invalid scheduling option '{0}'. Use 'natural_language', 'iso_date' or 'relative_time'"
    )]
    UnsupportedMode(String),

    /// No schedule value was given.
    #[error("Schedule value must not be empty")]
    EmptyValue,

    /// The value could not be read as a date/time.
    #[error(
        "Invalid ISO date: '{0}' is not a valid date/time (expected ISO 8601, e.g. 2024-12-25T10:00:00Z)"
    )]
    MalformedDateTime(String),

    /// The instant is not after the reference instant.
    #[error("Invalid ISO date: scheduled time {scheduled} must be in the future (now is {now})")]
    ScheduleNotInFuture { scheduled: String, now: String },

    /// The instant lies beyond the maximum lookahead window.
    #[error(
        "Invalid ISO date: scheduled time {scheduled} must be within {max_days} days (latest allowed is {latest})"
    )]
    ScheduleTooFarAhead {
        scheduled: String,
        max_days: i64,
        latest: String,
    },

    /// The relative phrase does not follow `in <N> <unit>`.
    #[error(
        "Relative time must be in format: \"in X minutes/hours/days\" (e.g., \"in 2 hours\"), got '{0}'"
    )]
    MalformedRelativePhrase(String),
}
