//! Create events on a CalDAV calendar.
//!
//! Uses libdav PutResource to create a new .ics resource.

use anyhow::{Context, Result};
use caladd_core::calendar::CalendarClient;
use caladd_core::config::CaldavConfig;
use caladd_core::event::NewEvent;
use caladd_core::ics::generate_ics;
use libdav::dav::{PutResource, mime_types};

use crate::caldav::{create_caldav_client, event_href};

/// One CalDAV calendar collection, addressed by server URL and path.
#[derive(Debug, Clone)]
pub struct CalDavCalendar {
    base_url: String,
    username: String,
    password: String,
    collection_path: String,
}

impl CalDavCalendar {
    pub fn new(config: &CaldavConfig) -> Self {
        CalDavCalendar {
            base_url: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            collection_path: config.calendar_path(),
        }
    }

    pub fn collection_path(&self) -> &str {
        &self.collection_path
    }
}

impl CalendarClient for CalDavCalendar {
    async fn create_event(&self, event: &NewEvent) -> Result<()> {
        let ics_content = generate_ics(event)?;
        let href = event_href(&self.collection_path, &event.uid);

        // Connection lives for this call only
        let caldav = create_caldav_client(&self.base_url, &self.username, &self.password)?;

        log::debug!("PUT {} on {}", href, self.base_url);

        // If-None-Match: * so an existing resource is never overwritten
        caldav
            .request(PutResource::new(&href).create(&ics_content, mime_types::CALENDAR))
            .await
            .with_context(|| format!("Failed to create event at {}", href))?;

        Ok(())
    }
}
