//! Scheduling requests and their normalized form.

use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;
use super::patterns;

/// How the caller expresses the desired send time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleMode {
    /// A concrete timestamp such as `2024-12-25T10:00:00Z` (tag `iso_date`).
    ExplicitDateTime,
    /// An offset such as `in 2 hours` (tag `relative_time`).
    RelativePhrase,
    /// Free-form text such as `tomorrow at 9am` (tag `natural_language`).
    NaturalLanguage,
}

impl ScheduleMode {
    /// All modes, in the order they are documented to clients.
    pub const ALL: [ScheduleMode; 3] = [
        Self::NaturalLanguage,
        Self::ExplicitDateTime,
        Self::RelativePhrase,
    ];

    /// The wire tag used in tool parameters.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::ExplicitDateTime => "iso_date",
            Self::RelativePhrase => "relative_time",
            Self::NaturalLanguage => "natural_language",
        }
    }

    /// Pick a mode for a single untagged schedule string.
    ///
    /// A leading calendar date means an explicit timestamp. Anything that is
    /// not a relative phrase is handed to the delivery API as natural language.
    pub fn detect(raw: &str) -> Self {
        let trimmed = raw.trim();
        if patterns::has_date_prefix(trimmed) {
            Self::ExplicitDateTime
        } else if patterns::relative_quantity(raw).is_some() {
            Self::RelativePhrase
        } else {
            Self::NaturalLanguage
        }
    }
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ScheduleMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_tag() == tag)
            .ok_or_else(|| ScheduleError::UnsupportedMode(s.to_string()))
    }
}

/// A caller's scheduling intent, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub mode: ScheduleMode,
    pub raw_value: String,
    /// IANA timezone name; only used in natural-language mode.
    pub timezone: Option<String>,
}

impl ScheduleRequest {
    /// Create a request without a timezone.
    pub fn new(mode: ScheduleMode, raw_value: impl Into<String>) -> Self {
        Self {
            mode,
            raw_value: raw_value.into(),
            timezone: None,
        }
    }

    /// Create a request from a raw mode tag, as received in tool parameters.
    pub fn from_tag(
        tag: &str,
        raw_value: impl Into<String>,
        timezone: Option<String>,
    ) -> Result<Self, ScheduleError> {
        Ok(Self::new(tag.parse()?, raw_value).with_timezone(timezone))
    }

    /// Create a request whose mode is detected from the value itself.
    pub fn detect(raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        Self::new(ScheduleMode::detect(&raw_value), raw_value)
    }

    /// Attach an optional timezone.
    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone;
        self
    }
}

/// Non-fatal observations made while normalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleWarning {
    /// A long natural-language phrase with no recognizable temporal words.
    UnrecognizedPhrase(String),
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedPhrase(phrase) => write!(
                f,
                "Scheduled time \"{phrase}\" may not be in a recognized format"
            ),
        }
    }
}

/// A schedule value ready to be sent to the delivery API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSchedule {
    /// Value for the `scheduled_at` request field.
    pub value: String,
    /// The mode that produced `value`.
    pub mode: ScheduleMode,
    pub warning: Option<ScheduleWarning>,
}
