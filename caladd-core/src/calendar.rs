//! The seam to a remote calendar.

use anyhow::Result;

use crate::event::NewEvent;

/// A remote calendar that can store one new event per call.
///
/// Implementations open their connection inside `create_event` and release it
/// before returning, whether the call succeeded or not.
#[allow(async_fn_in_trait)]
pub trait CalendarClient {
    async fn create_event(&self, event: &NewEvent) -> Result<()>;
}

impl<C: CalendarClient> CalendarClient for &C {
    async fn create_event(&self, event: &NewEvent) -> Result<()> {
        (**self).create_event(event).await
    }
}
