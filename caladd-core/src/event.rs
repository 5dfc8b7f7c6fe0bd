//! Resolved events and what gets submitted to a calendar.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};

use crate::constants::UID_DOMAIN;
use crate::error::AddEventError;

/// Title plus absolute local start and end. `end` may precede `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// The user's flat offset that `start` and `end` are local to.
    #[serde(serialize_with = "serialize_offset")]
    pub timezone: FixedOffset,
}

impl ResolvedEvent {
    /// Pin the local times to the event's offset and assign a fresh UID.
    ///
    /// Fails when a local time has no UTC instant in chrono's range.
    pub fn into_new_event(self) -> Result<NewEvent, AddEventError> {
        let start = localize(self.start, self.timezone).ok_or_else(|| {
            AddEventError::StartDate(format!("{} is out of range at {}", self.start, self.timezone))
        })?;
        let end = localize(self.end, self.timezone).ok_or_else(|| {
            AddEventError::EndDate(format!("{} is out of range at {}", self.end, self.timezone))
        })?;

        Ok(NewEvent {
            uid: format!("{}@{}", uuid::Uuid::new_v4(), UID_DOMAIN),
            summary: self.title,
            start,
            end,
        })
    }
}

fn serialize_offset<S: Serializer>(offset: &FixedOffset, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(offset)
}

/// A new event ready for a calendar client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub uid: String,
    pub summary: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Confirmation shown to the invoker after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

impl From<&NewEvent> for Confirmation {
    fn from(event: &NewEvent) -> Self {
        Confirmation {
            title: event.summary.clone(),
            start_timestamp: epoch_seconds(&event.start),
            end_timestamp: epoch_seconds(&event.end),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added event {} starting at <t:{}:F> and ending at <t:{}:F>",
            self.title, self.start_timestamp, self.end_timestamp
        )
    }
}

fn localize(naive: NaiveDateTime, timezone: FixedOffset) -> Option<DateTime<FixedOffset>> {
    // Fixed offsets have no gaps or folds
    let utc = naive.checked_sub_signed(Duration::seconds(i64::from(timezone.local_minus_utc())))?;
    Some(timezone.from_utc_datetime(&utc))
}

/// Whole seconds since the Unix epoch, truncated toward zero.
pub fn epoch_seconds<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    let secs = dt.timestamp();
    if secs < 0 && dt.timestamp_subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
