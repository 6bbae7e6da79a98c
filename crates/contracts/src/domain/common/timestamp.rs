//! Serde helpers for server-assigned timestamps.
//!
//! The catalog service may emit RFC 3339 values (`2024-03-15T14:02:26Z`) or
//! naive ones without an offset (`2024-03-15T14:02:26.1234567`). Naive values
//! are taken as UTC. A value that matches neither is dropped rather than
//! failing the whole record.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a timestamp in either RFC 3339 or naive ISO 8601 form
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `#[serde(with = "...")]` adapter for `Option<DateTime<Utc>>`
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => {
                serializer.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => {
                let parsed = parse_timestamp(&s);
                if parsed.is_none() {
                    log::warn!("Ignoring unparseable timestamp: {}", s);
                }
                Ok(parsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-03-15T14:02:26+03:00").unwrap();
        assert_eq!(dt.hour(), 11);
        assert_eq!(dt.day(), 15);
    }

    #[test]
    fn test_parse_naive_with_fraction() {
        let dt = parse_timestamp("2024-03-15T14:02:26.1234567").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.second(), 26);
    }

    #[test]
    fn test_parse_naive_without_fraction() {
        let dt = parse_timestamp("2024-12-31T23:59:59").unwrap();
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.minute(), 59);
    }

    #[test]
    fn test_parse_space_separated() {
        let dt = parse_timestamp("2024-03-15 14:02:26").unwrap();
        assert_eq!(dt.minute(), 2);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
