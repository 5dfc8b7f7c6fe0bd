//! ICS generation for new events.

use chrono::Utc;
use icalendar::{Calendar, Component, EventLike};

use crate::error::{CaladdError, CaladdResult};
use crate::event::NewEvent;

/// Generate .ics content holding a single VEVENT.
pub fn generate_ics(event: &NewEvent) -> CaladdResult<String> {
    if event.uid.is_empty() {
        return Err(CaladdError::IcsGenerate("event has no UID".into()));
    }

    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);

    // DTSTAMP is required by RFC 5545
    ics_event.add_property("DTSTAMP", Utc::now().format("%Y%m%dT%H%M%SZ").to_string());

    ics_event.starts(event.start.with_timezone(&Utc));
    ics_event.ends(event.end.with_timezone(&Utc));

    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with CALADD
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CALADD\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
