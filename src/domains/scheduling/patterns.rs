//! Regular expressions for the phrasings the scheduler understands.
//!
//! Digits are spelled `[0-9]` rather than `\d` so that only ASCII numerals
//! are accepted.

use regex::Regex;
use std::sync::LazyLock;

/// Full relative-time grammar: `in <N> minute(s)|hour(s)|day(s)`.
static RELATIVE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^in\s+([0-9]+)\s+(minute|minutes|hour|hours|day|days)$")
        .expect("Invalid relative phrase regex")
});

/// Leading calendar date, used to recognize explicit timestamps.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Invalid date regex"));

/// Hints that a natural-language phrase is something the delivery API can read.
static TEMPORAL_HINTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)in [0-9]+ (minute|minutes|hour|hours|day|days)"),
        Regex::new(r"(?i)(tomorrow|today|monday|tuesday|wednesday|thursday|friday|saturday|sunday)"),
        Regex::new(r"(?i)at [0-9]{1,2}(:[0-9]{2})?\s*(am|pm)"),
    ]
    .map(|r| r.expect("Invalid temporal hint regex"))
});

/// Return the quantity of a relative phrase, if `value` follows the grammar.
///
/// The quantity is returned as its digit string so arbitrarily large values
/// never overflow.
pub fn relative_quantity(value: &str) -> Option<&str> {
    RELATIVE_PHRASE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `value` starts with a `YYYY-MM-DD` date.
pub fn has_date_prefix(value: &str) -> bool {
    DATE_PREFIX.is_match(value)
}

/// Whether `value` contains any recognizable temporal hint.
pub fn has_temporal_hint(value: &str) -> bool {
    TEMPORAL_HINTS.iter().any(|r| r.is_match(value))
}
