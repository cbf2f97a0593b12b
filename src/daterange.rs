//! Publication-date range resolution for the search command.
//!
//! Turns two optional raw flag values into a validated [`SearchCriteria`]
//! anchored to an injected "now". Inputs in the two canonical shapes
//! (`YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`) are normalized directly; other
//! inputs go through a flexible parse covering a handful of common
//! formats and relative expressions. Anything still unrecognized falls
//! back to the computed default for that bound and is reported as a
//! [`FallbackNotice`], or fails outright in strict mode.
//!
//! Both defaults anchor independently to `now`: supplying one flag never
//! shifts the other bound's default.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{SearchCriteria, READ_MORE_MARKER, TIMESTAMP_FORMAT};

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DATETIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}$").unwrap());
static DAYS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+days?\s+ago$").unwrap());

#[derive(Debug, Error)]
pub enum DateResolveError {
    /// Shaped like a date but not a real calendar timestamp.
    #[error("invalid --{flag} value '{value}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM:SS.")]
    Format { flag: &'static str, value: String },

    /// Lower bound strictly later than upper bound.
    #[error("date-after ({after}) must be earlier than or equal to date-before ({before})")]
    Range { after: String, before: String },

    /// Strict mode refusal of a value that lenient mode would have
    /// replaced with the default.
    #[error("unrecognized --{flag} value '{value}'")]
    Unrecognized { flag: &'static str, value: String },
}

/// A bound whose raw value could not be parsed and was replaced by the
/// computed default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackNotice {
    pub flag: &'static str,
    pub rejected: String,
    pub substituted: String,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct ResolvedRange {
    pub criteria: SearchCriteria,
    pub fallbacks: Vec<FallbackNotice>,
}

/// Resolve raw `--date-after` / `--date-before` values into search
/// criteria. Pure function of its inputs; `now` must be injected.
pub fn resolve(
    raw_after: Option<&str>,
    raw_before: Option<&str>,
    now: DateTime<Utc>,
    window_days: i64,
    strict: bool,
) -> Result<ResolvedRange, DateResolveError> {
    let now = now.naive_utc().with_nanosecond(0).unwrap_or_else(|| now.naive_utc());
    let default_before = now;
    let default_after = (now.date() - Duration::days(window_days))
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut fallbacks = Vec::new();
    let (after, notice) = resolve_bound(raw_after, default_after, "date-after", now, strict)?;
    fallbacks.extend(notice);
    let (before, notice) = resolve_bound(raw_before, default_before, "date-before", now, strict)?;
    fallbacks.extend(notice);

    if after > before {
        return Err(DateResolveError::Range {
            after: after.format(TIMESTAMP_FORMAT).to_string(),
            before: before.format(TIMESTAMP_FORMAT).to_string(),
        });
    }

    Ok(ResolvedRange {
        criteria: SearchCriteria {
            after,
            before,
            marker: READ_MORE_MARKER,
        },
        fallbacks,
    })
}

fn resolve_bound(
    raw: Option<&str>,
    default: NaiveDateTime,
    flag: &'static str,
    now: NaiveDateTime,
    strict: bool,
) -> Result<(NaiveDateTime, Option<FallbackNotice>), DateResolveError> {
    let raw = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => return Ok((default, None)),
    };

    if let Some(candidate) = normalize_strict(raw) {
        let parsed =
            NaiveDateTime::parse_from_str(&candidate, TIMESTAMP_FORMAT).map_err(|_| {
                DateResolveError::Format {
                    flag,
                    value: raw.to_string(),
                }
            })?;
        return Ok((parsed, None));
    }

    if let Some(parsed) = parse_flexible(raw, now) {
        return Ok((parsed, None));
    }

    if strict {
        return Err(DateResolveError::Unrecognized {
            flag,
            value: raw.to_string(),
        });
    }

    let notice = FallbackNotice {
        flag,
        rejected: raw.to_string(),
        substituted: default.format(TIMESTAMP_FORMAT).to_string(),
    };
    Ok((default, Some(notice)))
}

/// Normalize the two canonical shapes to `YYYY-MM-DD HH:MM:SS`.
///
/// A bare date gets midnight appended; a full timestamp passes through
/// unchanged (so the operation is idempotent). Returns `None` when the
/// input matches neither shape. Shape matching is textual only; whether
/// the value is a real calendar timestamp is checked by the caller.
pub fn normalize_strict(input: &str) -> Option<String> {
    let input = input.trim();
    if DATE_SHAPE.is_match(input) {
        return Some(format!("{input} 00:00:00"));
    }
    if DATETIME_SHAPE.is_match(input) {
        return Some(input.to_string());
    }
    None
}

/// Best-effort parse of inputs outside the canonical shapes.
fn parse_flexible(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let lowered = input.to_ascii_lowercase();
    match lowered.as_str() {
        "now" => return Some(now),
        "today" => return now.date().and_hms_opt(0, 0, 0),
        "yesterday" => return (now.date() - Duration::days(1)).and_hms_opt(0, 0, 0),
        _ => {}
    }

    if let Some(caps) = DAYS_AGO.captures(&lowered) {
        if let Ok(days) = caps[1].parse::<i64>() {
            return Some(now - Duration::days(days));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y/%m/%d", "%d %B %Y", "%B %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(input, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
