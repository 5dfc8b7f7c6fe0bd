//! CalDAV calendar client for caladd.

pub mod caldav;
pub mod calendar;

pub use calendar::CalDavCalendar;
