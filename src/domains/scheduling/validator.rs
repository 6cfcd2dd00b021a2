//! Schedule normalization.

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc,
};
use tracing::debug;

use super::error::ScheduleError;
use super::patterns;
use super::request::{NormalizedSchedule, ScheduleMode, ScheduleRequest, ScheduleWarning};

/// How far ahead an explicit timestamp may lie.
pub const MAX_LOOKAHEAD_DAYS: i64 = 30;

/// Natural-language phrases longer than this with no recognizable hint get a warning.
const UNRECOGNIZED_PHRASE_LENGTH: usize = 50;

/// Offset-less layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset layouts chrono's RFC 3339 parser does not accept (e.g. `+0100`).
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Validate a scheduling request against `reference` ("now") and produce the
/// value to send as `scheduled_at`.
///
/// Explicit timestamps must fall in `(reference, reference + 30 days]` and are
/// re-serialized as `YYYY-MM-DDTHH:MM:SS.mmmZ`. Relative phrases must follow
/// `in <N> minute(s)|hour(s)|day(s)` and pass through unchanged. Natural
/// language is never rejected; the timezone, if any, is appended.
pub fn normalize(
    request: &ScheduleRequest,
    reference: DateTime<Utc>,
) -> Result<NormalizedSchedule, ScheduleError> {
    let raw = request.raw_value.as_str();
    if raw.trim().is_empty() {
        return Err(ScheduleError::EmptyValue);
    }

    let normalized = match request.mode {
        ScheduleMode::ExplicitDateTime => normalize_explicit(raw, reference)?,
        ScheduleMode::RelativePhrase => normalize_relative(raw)?,
        ScheduleMode::NaturalLanguage => normalize_natural(raw, request.timezone.as_deref()),
    };

    debug!(
        mode = %normalized.mode,
        raw = raw,
        value = %normalized.value,
        "Normalized schedule"
    );

    Ok(normalized)
}

fn normalize_explicit(
    raw: &str,
    reference: DateTime<Utc>,
) -> Result<NormalizedSchedule, ScheduleError> {
    let scheduled = parse_datetime(raw.trim())
        .ok_or_else(|| ScheduleError::MalformedDateTime(raw.to_string()))?
        .trunc_subsecs(3);

    if scheduled <= reference {
        return Err(ScheduleError::ScheduleNotInFuture {
            scheduled: canonical(scheduled),
            now: canonical(reference),
        });
    }

    let latest = reference + Duration::days(MAX_LOOKAHEAD_DAYS);
    if scheduled > latest {
        return Err(ScheduleError::ScheduleTooFarAhead {
            scheduled: canonical(scheduled),
            max_days: MAX_LOOKAHEAD_DAYS,
            latest: canonical(latest),
        });
    }

    Ok(NormalizedSchedule {
        value: canonical(scheduled),
        mode: ScheduleMode::ExplicitDateTime,
        warning: None,
    })
}

fn normalize_relative(raw: &str) -> Result<NormalizedSchedule, ScheduleError> {
    let quantity = patterns::relative_quantity(raw)
        .ok_or_else(|| ScheduleError::MalformedRelativePhrase(raw.to_string()))?;

    // "in 0 minutes" follows the shape but not the positive-quantity rule.
    if quantity.bytes().all(|b| b == b'0') {
        return Err(ScheduleError::MalformedRelativePhrase(raw.to_string()));
    }

    Ok(NormalizedSchedule {
        value: raw.to_string(),
        mode: ScheduleMode::RelativePhrase,
        warning: None,
    })
}

fn normalize_natural(raw: &str, timezone: Option<&str>) -> NormalizedSchedule {
    let value = match timezone.map(str::trim).filter(|tz| !tz.is_empty()) {
        Some(tz) => format!("{raw} {tz}"),
        None => raw.to_string(),
    };

    let warning = (!patterns::has_temporal_hint(raw)
        && raw.chars().count() > UNRECOGNIZED_PHRASE_LENGTH)
        .then(|| ScheduleWarning::UnrecognizedPhrase(raw.to_string()));

    NormalizedSchedule {
        value,
        mode: ScheduleMode::NaturalLanguage,
        warning,
    }
}

/// Parse the date/time layouts accepted for explicit schedules.
fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn canonical(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Utc> {
        "2024-01-01T00:00:00Z".parse().unwrap()
    }

    fn explicit(raw: &str) -> Result<NormalizedSchedule, ScheduleError> {
        normalize(
            &ScheduleRequest::new(ScheduleMode::ExplicitDateTime, raw),
            reference(),
        )
    }

    fn relative(raw: &str) -> Result<NormalizedSchedule, ScheduleError> {
        normalize(
            &ScheduleRequest::new(ScheduleMode::RelativePhrase, raw),
            reference(),
        )
    }

    fn natural(raw: &str, timezone: Option<&str>) -> NormalizedSchedule {
        let request = ScheduleRequest::new(ScheduleMode::NaturalLanguage, raw)
            .with_timezone(timezone.map(str::to_string));
        normalize(&request, reference()).unwrap()
    }

    #[test]
    fn test_explicit_within_window() {
        let result = explicit("2024-01-15T10:00:00Z").unwrap();
        assert_eq!(result.value, "2024-01-15T10:00:00.000Z");
        assert_eq!(result.mode, ScheduleMode::ExplicitDateTime);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_explicit_too_far_ahead() {
        let err = explicit("2024-03-01T00:00:00Z").unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::ScheduleTooFarAhead { max_days: 30, .. }
        ));
        assert!(err.to_string().contains("within 30 days"));
    }

    #[test]
    fn test_explicit_window_edges() {
        assert!(matches!(
            explicit("2024-01-01T00:00:00Z"),
            Err(ScheduleError::ScheduleNotInFuture { .. })
        ));
        assert_eq!(
            explicit("2024-01-01T00:00:00.001Z").unwrap().value,
            "2024-01-01T00:00:00.001Z"
        );
        assert_eq!(
            explicit("2024-01-31T00:00:00Z").unwrap().value,
            "2024-01-31T00:00:00.000Z"
        );
        assert!(matches!(
            explicit("2024-01-31T00:00:00.001Z"),
            Err(ScheduleError::ScheduleTooFarAhead { .. })
        ));
    }

    #[test]
    fn test_explicit_in_past() {
        let err = explicit("2023-12-25T10:00:00Z").unwrap_err();
        assert!(matches!(err, ScheduleError::ScheduleNotInFuture { .. }));
        assert!(err.to_string().contains("must be in the future"));
    }

    #[test]
    fn test_explicit_converts_offsets_to_utc() {
        assert_eq!(
            explicit("2024-01-15T10:00:00+02:00").unwrap().value,
            "2024-01-15T08:00:00.000Z"
        );
        assert_eq!(
            explicit("2024-01-15T10:00:00-0500").unwrap().value,
            "2024-01-15T15:00:00.000Z"
        );
        assert_eq!(
            explicit("Mon, 15 Jan 2024 10:00:00 +0000").unwrap().value,
            "2024-01-15T10:00:00.000Z"
        );
    }

    #[test]
    fn test_explicit_naive_layouts_are_utc() {
        assert_eq!(
            explicit("2024-01-15T10:00:00").unwrap().value,
            "2024-01-15T10:00:00.000Z"
        );
        assert_eq!(
            explicit("2024-01-15 10:30").unwrap().value,
            "2024-01-15T10:30:00.000Z"
        );
        assert_eq!(
            explicit("2024-01-15").unwrap().value,
            "2024-01-15T00:00:00.000Z"
        );
        assert_eq!(
            explicit("  2024-01-15T10:00:00.250Z ").unwrap().value,
            "2024-01-15T10:00:00.250Z"
        );
    }

    #[test]
    fn test_explicit_truncates_to_milliseconds() {
        assert_eq!(
            explicit("2024-01-15T10:00:00.123456789Z").unwrap().value,
            "2024-01-15T10:00:00.123Z"
        );
    }

    #[test]
    fn test_explicit_malformed() {
        for raw in ["tomorrow", "2024-13-45T10:00:00Z", "2024-01-15T25:00:00Z", "12/25/2024"] {
            assert_eq!(
                explicit(raw),
                Err(ScheduleError::MalformedDateTime(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_explicit_round_trip() {
        let reference = reference();
        for offset_minutes in [1_i64, 59, 60 * 24, 60 * 24 * 29 + 1439, 60 * 24 * 30] {
            let instant = reference + Duration::minutes(offset_minutes);
            let raw = instant.to_rfc3339();
            let result = explicit(&raw).unwrap();
            let reparsed: DateTime<Utc> = result.value.parse().unwrap();
            assert_eq!(reparsed, instant, "{raw}");
        }
    }

    #[test]
    fn test_relative_accepts_grammar_unchanged() {
        for raw in [
            "in 2 hours",
            "in 1 minute",
            "IN 45 MINUTES",
            "in 3 Days",
            "in  10\thours",
            "in 999999 hours",
        ] {
            let result = relative(raw).unwrap();
            assert_eq!(result.value, raw);
            assert_eq!(result.mode, ScheduleMode::RelativePhrase);
        }
    }

    #[test]
    fn test_relative_rejects_other_shapes() {
        for raw in [
            "soon",
            "in two hours",
            "in -2 hours",
            "in +2 hours",
            "in 2.5 hours",
            "in 2 weeks",
            "2 hours",
            "in 0 minutes",
            "in 00 days",
        ] {
            assert_eq!(
                relative(raw),
                Err(ScheduleError::MalformedRelativePhrase(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_relative_error_mentions_grammar() {
        let message = relative("soon").unwrap_err().to_string();
        assert!(message.contains("in X minutes/hours/days"));
    }

    #[test]
    fn test_natural_with_timezone() {
        let result = natural("tomorrow at 9am", Some("America/New_York"));
        assert_eq!(result.value, "tomorrow at 9am America/New_York");
        assert_eq!(result.mode, ScheduleMode::NaturalLanguage);
    }

    #[test]
    fn test_natural_without_timezone() {
        assert_eq!(natural("Friday at 3pm ET", None).value, "Friday at 3pm ET");
        assert_eq!(natural("Friday at 3pm ET", Some("  ")).value, "Friday at 3pm ET");
    }

    #[test]
    fn test_natural_warning_for_long_unrecognized_phrase() {
        let phrase = "whenever the whole team is back from the offsite next quarter";
        assert!(phrase.len() > 50);
        let result = natural(phrase, None);
        assert_eq!(
            result.warning,
            Some(ScheduleWarning::UnrecognizedPhrase(phrase.to_string()))
        );
        assert_eq!(result.value, phrase);
    }

    #[test]
    fn test_natural_no_warning_when_short_or_recognized() {
        assert!(natural("after lunch", None).warning.is_none());
        let long_recognized = "tomorrow morning right after the weekly planning meeting ends";
        assert!(long_recognized.len() > 50);
        assert!(natural(long_recognized, None).warning.is_none());
    }

    #[test]
    fn test_empty_value_rejected() {
        for mode in ScheduleMode::ALL {
            assert_eq!(
                normalize(&ScheduleRequest::new(mode, "   "), reference()),
                Err(ScheduleError::EmptyValue)
            );
        }
    }
}
