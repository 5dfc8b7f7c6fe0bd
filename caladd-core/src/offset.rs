//! Signed offsets like `+15m` or `-1h`.
//!
//! An offset expression is a direction sign, a whole number and a unit
//! letter, with nothing else around it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

use crate::error::OffsetError;

static OFFSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-][0-9]+[hm]$").expect("offset pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Hours,
    Minutes,
}

/// A signed whole number of hours or minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub direction: Direction,
    pub magnitude: u32,
    pub unit: OffsetUnit,
}

impl Offset {
    /// The offset as a signed duration; `-` offsets are negative.
    pub fn duration(&self) -> Duration {
        let magnitude = i64::from(self.magnitude);
        let unsigned = match self.unit {
            OffsetUnit::Hours => Duration::hours(magnitude),
            OffsetUnit::Minutes => Duration::minutes(magnitude),
        };

        match self.direction {
            Direction::Plus => unsigned,
            Direction::Minus => -unsigned,
        }
    }
}

/// Whether `input` is exactly an offset expression (`+15m`, `-2h`).
pub fn is_offset_expression(input: &str) -> bool {
    OFFSET_PATTERN.is_match(input)
}

/// Parse an offset expression.
///
/// Checks run in order and the first failure is reported: direction sign,
/// then unit letter, then magnitude.
pub fn parse_offset(input: &str) -> Result<Offset, OffsetError> {
    let mut chars = input.chars();

    let first = chars.next();
    let direction = match first {
        Some('+') => Direction::Plus,
        Some('-') => Direction::Minus,
        other => {
            return Err(OffsetError::Direction(
                other.map(String::from).unwrap_or_default(),
            ));
        }
    };

    let last = chars.next_back();
    let unit = match last {
        Some('h') => OffsetUnit::Hours,
        Some('m') => OffsetUnit::Minutes,
        // A lone sign has no separate last character
        None => return Err(OffsetError::Unit(input.to_string())),
        Some(other) => return Err(OffsetError::Unit(other.to_string())),
    };

    let magnitude_str = chars.as_str();
    if magnitude_str.is_empty() || !magnitude_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OffsetError::Magnitude(magnitude_str.to_string()));
    }
    let magnitude = magnitude_str
        .parse::<u32>()
        .map_err(|_| OffsetError::Magnitude(magnitude_str.to_string()))?;

    Ok(Offset {
        direction,
        magnitude,
        unit,
    })
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_offset(s)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            Direction::Plus => '+',
            Direction::Minus => '-',
        };
        let unit = match self.unit {
            OffsetUnit::Hours => 'h',
            OffsetUnit::Minutes => 'm',
        };
        write!(f, "{}{}{}", sign, self.magnitude, unit)
    }
}
