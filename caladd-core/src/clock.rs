//! Wall clock used to resolve "now" placeholders.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current local date and time for a user in `timezone`.
    fn local_now(&self, timezone: FixedOffset) -> NaiveDateTime {
        self.now().with_timezone(&timezone).naive_local()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
