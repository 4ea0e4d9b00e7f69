use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone that aware timestamps are shifted into before bucketing and display.
/// Without one, timestamps keep the offset they were recorded with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn shift(self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = dt.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let zoned = dt.with_timezone(&tz);
                let offset = zoned.offset().fix();
                zoned.with_timezone(&offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_and_local_return_local() {
        assert!(matches!(Timezone::parse("").unwrap(), Timezone::Local));
        assert!(matches!(Timezone::parse("LOCAL").unwrap(), Timezone::Local));
        assert!(matches!(Timezone::parse("  local  ").unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z", " UTC "] {
            let tz = Timezone::parse(raw).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)), "{raw}");
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse("America/New_York").unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn shift_into_named_zone_moves_wall_clock() {
        let dt = DateTime::parse_from_rfc3339("2026-06-15T02:00:00+00:00").unwrap();
        let shifted = Timezone::parse("America/New_York").unwrap().shift(dt);
        // EDT is UTC-4 in June, so this lands on the previous day
        assert_eq!(shifted.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(shifted.format("%Y-%m-%d %H:%M").to_string(), "2026-06-14 22:00");
    }

    #[test]
    fn shift_preserves_instant() {
        let dt = DateTime::parse_from_rfc3339("2026-02-12T10:00:00+08:00").unwrap();
        let shifted = Timezone::Named(chrono_tz::UTC).shift(dt);
        assert_eq!(shifted, dt);
        assert_eq!(shifted.format("%H:%M").to_string(), "02:00");
    }
}
