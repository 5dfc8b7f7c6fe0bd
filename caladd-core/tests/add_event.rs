//! End-to-end: raw arguments in, one submission out.

use std::cell::RefCell;

use caladd_core::AddEventService;
use caladd_core::Resolver;
use caladd_core::calendar::CalendarClient;
use caladd_core::clock::FixedClock;
use caladd_core::event::NewEvent;
use caladd_core::ics::generate_ics;
use caladd_core::settings::{StaticSettings, UserSettings};
use chrono::{NaiveDate, TimeZone, Utc};

/// Records each submission as the generated ICS body, like a CalDAV PUT would send.
#[derive(Default)]
struct RecordingCalendar {
    submissions: RefCell<Vec<(NewEvent, String)>>,
}

impl CalendarClient for RecordingCalendar {
    async fn create_event(&self, event: &NewEvent) -> anyhow::Result<()> {
        let ics = generate_ics(event)?;
        self.submissions.borrow_mut().push((event.clone(), ics));
        Ok(())
    }
}

fn service(
    calendar: &RecordingCalendar,
    settings: UserSettings,
) -> AddEventService<StaticSettings, FixedClock, &RecordingCalendar> {
    let resolver = Resolver::new(
        StaticSettings::new(settings),
        FixedClock(Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap()),
    );
    AddEventService::new(resolver, calendar)
}

#[tokio::test]
async fn standup_with_end_offset() {
    let calendar = RecordingCalendar::default();
    let service = service(&calendar, UserSettings::default());

    let message = service
        .add_event("discord:42", &["Standup", "2024-06-01", "09:00", "!", "+15m"])
        .await;

    let submissions = calendar.submissions.borrow();
    assert_eq!(submissions.len(), 1);

    let (event, ics) = &submissions[0];
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(9, 15, 0).unwrap();
    assert_eq!(event.summary, "Standup");
    assert_eq!(event.start.naive_local(), start);
    assert_eq!(event.end.naive_local(), end);

    assert!(ics.contains("SUMMARY:Standup"), "ICS:\n{}", ics);
    assert!(ics.contains("DTSTART:20240601T130000Z"), "ICS:\n{}", ics);
    assert!(ics.contains("DTEND:20240601T131500Z"), "ICS:\n{}", ics);

    let start_ts = event.start.timestamp();
    let end_ts = event.end.timestamp();
    assert_eq!(end_ts - start_ts, 15 * 60);
    assert_eq!(
        message,
        format!(
            "Added event Standup starting at <t:{}:F> and ending at <t:{}:F>",
            start_ts, end_ts
        )
    );
}

#[tokio::test]
async fn placeholders_everywhere() {
    let calendar = RecordingCalendar::default();
    let service = service(
        &calendar,
        UserSettings {
            default_offset: "+45m".to_string(),
            timezone_offset: "+00:00".to_string(),
        },
    );

    let message = service.add_event("u", &["Focus", "!", "!", "!", "!"]).await;
    assert!(message.starts_with("Added event Focus"), "{}", message);

    let submissions = calendar.submissions.borrow();
    let (event, _) = &submissions[0];
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap();
    assert_eq!(event.start.with_timezone(&Utc), now);
    assert_eq!(
        event.end.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2024, 5, 20, 15, 45, 0).unwrap()
    );
}

#[tokio::test]
async fn failures_are_messages_not_panics() {
    let calendar = RecordingCalendar::default();
    let service = service(&calendar, UserSettings::default());

    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["Standup"], "Invalid number of arguments specified."),
        (
            vec!["Standup", "2024-06-01", "09:00", "!", "+15m", "extra"],
            "Invalid number of arguments specified.",
        ),
        (
            vec!["Standup", "2024-13-40", "09:00", "!", "+15m"],
            "Unable to parse start date.",
        ),
        (
            vec!["Standup", "2024-06-01", "9 o'clock", "!", "+15m"],
            "Unable to parse start time.",
        ),
        (
            vec!["Standup", "2024-06-01", "09:00", "June 1st", "+15m"],
            "Unable to parse end date.",
        ),
        (
            vec!["Standup", "2024-06-01", "09:00", "!", "+15x"],
            "Unable to parse end time.",
        ),
    ];

    for (args, expected) in &cases {
        let message = service.add_event("u", args.as_slice()).await;
        assert_eq!(message, *expected, "args: {:?}", args);
    }

    assert!(calendar.submissions.borrow().is_empty());
}
