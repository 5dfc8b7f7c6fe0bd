//! Placeholder-aware argument fields.
//!
//! Each positional argument is either a concrete value or the `!` sentinel,
//! which defers to a rule that depends on earlier fields.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::SENTINEL;
use crate::offset::{Offset, is_offset_expression, parse_offset};

/// A field that is either given explicitly or left to its default rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Explicit(T),
    UseDefault,
}

impl<T> Field<T> {
    /// Parse `raw` with `parse` unless it is the sentinel.
    pub fn parse_with<F>(raw: &str, parse: F) -> Result<Self, String>
    where
        F: FnOnce(&str) -> Result<T, String>,
    {
        if raw == SENTINEL {
            Ok(Field::UseDefault)
        } else {
            parse(raw).map(Field::Explicit)
        }
    }

    /// The explicit value, or the result of `default` for a placeholder.
    pub fn resolve_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Field::Explicit(value) => value,
            Field::UseDefault => default(),
        }
    }
}

impl Field<NaiveDate> {
    pub fn date(raw: &str) -> Result<Self, String> {
        Self::parse_with(raw, parse_date)
    }
}

impl Field<NaiveTime> {
    pub fn time(raw: &str) -> Result<Self, String> {
        Self::parse_with(raw, parse_time)
    }
}

/// The end-time argument, tried in priority order: placeholder, offset, literal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndTime {
    UseDefault,
    Offset(Offset),
    Literal(NaiveTime),
}

impl EndTime {
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw == SENTINEL {
            return Ok(EndTime::UseDefault);
        }

        if is_offset_expression(raw) {
            return parse_offset(raw)
                .map(EndTime::Offset)
                .map_err(|e| e.to_string());
        }

        parse_time(raw).map(EndTime::Literal)
    }
}

/// Parse an ISO-8601 calendar date (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Parse an ISO-8601 time of day: HH, HH:MM, HH:MM:SS or HH:MM:SS.fff
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let invalid = || format!("Invalid time format '{}'. Expected HH:MM[:SS]", s);

    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        let hour = s.parse::<u32>().map_err(|_| invalid())?;
        return NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(invalid);
    }

    ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(invalid)
}
