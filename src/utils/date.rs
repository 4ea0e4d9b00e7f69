use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::core::Timestamp;

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp as written in `sessions-index.json`.
///
/// A trailing `Z` is read as `+00:00`. Values with an offset become
/// [`Timestamp::Aware`], values without one stay [`Timestamp::Naive`], and a
/// bare date is taken as midnight. Anything else yields `None`.
pub(crate) fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let with_offset;
    let value = match trimmed.strip_suffix('Z') {
        Some(rest) => {
            with_offset = format!("{rest}+00:00");
            with_offset.as_str()
        }
        None => trimmed,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(Timestamp::Aware(dt));
    }
    for fmt in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(Timestamp::Aware(dt));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(Timestamp::Naive(dt));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Timestamp::Naive)
}
