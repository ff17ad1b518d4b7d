//! The `updated` timestamp shared by the feed and `meta.json`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HolidayError, HolidayResult};

/// Accepts any number of fractional digits (Google sends milliseconds).
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Always six fractional digits on output.
const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A UTC instant as written in `meta.json`, e.g. `2024-01-02T03:04:05.123000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn parse(value: &str) -> HolidayResult<Self> {
        NaiveDateTime::parse_from_str(value, PARSE_FORMAT)
            .map(|naive| {
                let dt = naive.and_utc();
                // meta.json keeps microseconds; finer digits would never
                // compare equal to the stored value again.
                let micros = dt.nanosecond() / 1_000 * 1_000;
                Timestamp(dt.with_nanosecond(micros).unwrap_or(dt))
            })
            .map_err(|_| HolidayError::Timestamp(value.to_string()))
    }

    /// The Unix epoch, used to seed a fresh `meta.json` so the first sync
    /// always counts as an update.
    pub fn epoch() -> Self {
        Timestamp(DateTime::UNIX_EPOCH)
    }
}

impl FromStr for Timestamp {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WRITE_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_fraction() {
        let ts = Timestamp::parse("2024-01-02T03:04:05.123456Z").unwrap();
        assert_eq!(ts.0.nanosecond(), 123_456_000);
        assert_eq!(ts.to_string(), "2024-01-02T03:04:05.123456Z");
    }

    #[test]
    fn test_parse_millisecond_fraction_from_google() {
        let ts = Timestamp::parse("2024-05-20T08:30:00.250Z").unwrap();
        assert_eq!(ts.0.nanosecond(), 250_000_000);
        assert_eq!(ts.to_string(), "2024-05-20T08:30:00.250000Z");
    }

    #[test]
    fn test_sub_microsecond_digits_are_dropped() {
        let fine = Timestamp::parse("2024-01-02T00:00:00.123456789Z").unwrap();
        let coarse = Timestamp::parse("2024-01-02T00:00:00.123456Z").unwrap();

        assert_eq!(fine, coarse);
        assert_eq!(fine.to_string(), "2024-01-02T00:00:00.123456Z");
        assert_eq!(Timestamp::parse(&fine.to_string()).unwrap(), fine);
    }

    #[test]
    fn test_display_always_has_six_digits() {
        let ts = Timestamp::parse("2023-01-01T00:00:00.000000Z").unwrap();
        assert_eq!(ts.to_string(), "2023-01-01T00:00:00.000000Z");
        assert_eq!(Timestamp::epoch().to_string(), "1970-01-01T00:00:00.000000Z");
    }

    #[test]
    fn test_rejects_malformed_values() {
        let bad_values = [
            "",
            "2024-01-02",
            "2024-01-02 00:00:00.000Z",
            "2024-01-02T00:00:00.000+07:00",
            "yesterday",
        ];

        for bad in bad_values {
            let err = Timestamp::parse(bad).unwrap_err();
            assert!(
                matches!(err, HolidayError::Timestamp(ref v) if v == bad),
                "expected timestamp error for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Timestamp = "2024-01-02T00:00:00.000Z".parse().unwrap();
        assert_eq!(parsed, Timestamp::parse("2024-01-02T00:00:00.000000Z").unwrap());
        assert!("2024-01-02".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_ordering_follows_time() {
        let older = Timestamp::parse("2023-01-01T00:00:00.000000Z").unwrap();
        let newer = Timestamp::parse("2024-01-02T00:00:00.000Z").unwrap();
        assert!(older < newer);
        assert!(Timestamp::epoch() < older);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let ts = Timestamp::parse("2024-01-02T00:00:00.5Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-02T00:00:00.500000Z\"");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);

        assert!(serde_json::from_str::<Timestamp>("\"not a time\"").is_err());
    }
}
