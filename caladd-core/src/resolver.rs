//! Turns the five raw arguments into an absolute start and end.
//!
//! Fields resolve strictly in order because later defaults read earlier
//! results: the end date defaults to the start date, and the end time is
//! derived from the start time-of-day.

use chrono::{FixedOffset, NaiveTime};

use crate::clock::Clock;
use crate::error::AddEventError;
use crate::event::ResolvedEvent;
use crate::field::{EndTime, Field};
use crate::offset::Offset;
use crate::request::RawEventRequest;
use crate::settings::{SettingsStore, UserSettings};

pub struct Resolver<S, K> {
    settings: S,
    clock: K,
}

impl<S: SettingsStore, K: Clock> Resolver<S, K> {
    pub fn new(settings: S, clock: K) -> Self {
        Resolver { settings, clock }
    }

    /// Resolve `[name, start date, start time, end date, end time]`.
    ///
    /// The first field that fails stops resolution; nothing after it is parsed.
    /// The returned event carries the offset its local times were resolved in.
    pub fn resolve<A: AsRef<str>>(
        &self,
        user_id: &str,
        args: &[A],
    ) -> Result<ResolvedEvent, AddEventError> {
        let request = RawEventRequest::from_args(args)?;
        let settings = self.settings.user_settings(user_id);
        let timezone = settings.timezone().map_err(AddEventError::Settings)?;

        self.resolve_request(&request, &settings, timezone)
    }

    fn resolve_request(
        &self,
        request: &RawEventRequest,
        settings: &UserSettings,
        timezone: FixedOffset,
    ) -> Result<ResolvedEvent, AddEventError> {
        let now = self.clock.local_now(timezone);

        let start_date = Field::date(&request.start_date)
            .map_err(AddEventError::StartDate)?
            .resolve_or_else(|| now.date());

        let start_time = Field::time(&request.start_time)
            .map_err(AddEventError::StartTime)?
            .resolve_or_else(|| now.time());

        let start = start_date.and_time(start_time);
        log::debug!("Resolved start of '{}' to {}", request.event_name, start);

        let end_date = Field::date(&request.end_date)
            .map_err(AddEventError::EndDate)?
            .resolve_or_else(|| start.date());

        let end_time = match EndTime::parse(&request.end_time).map_err(AddEventError::EndTime)? {
            EndTime::UseDefault => {
                let offset = settings.default_offset.parse::<Offset>().map_err(|e| {
                    AddEventError::EndTime(format!(
                        "Default offset '{}': {}",
                        settings.default_offset, e
                    ))
                })?;
                log::debug!("End time placeholder uses default offset {}", offset);
                shift_time_of_day(start_time, offset)
            }
            EndTime::Offset(offset) => shift_time_of_day(start_time, offset),
            EndTime::Literal(time) => time,
        };

        let end = end_date.and_time(end_time);
        log::debug!("Resolved end of '{}' to {}", request.event_name, end);

        Ok(ResolvedEvent {
            title: request.event_name.clone(),
            start,
            end,
            timezone,
        })
    }
}

/// Move a time of day by `offset`, wrapping around midnight.
fn shift_time_of_day(time: NaiveTime, offset: Offset) -> NaiveTime {
    let (shifted, _wrapped_secs) = time.overflowing_add_signed(offset.duration());
    shifted
}
