//! One add-event invocation: resolve, submit once, report.

use crate::calendar::CalendarClient;
use crate::clock::Clock;
use crate::error::AddEventError;
use crate::event::{Confirmation, ResolvedEvent};
use crate::resolver::Resolver;
use crate::settings::SettingsStore;

pub struct AddEventService<S, K, C> {
    resolver: Resolver<S, K>,
    client: C,
}

impl<S: SettingsStore, K: Clock, C: CalendarClient> AddEventService<S, K, C> {
    pub fn new(resolver: Resolver<S, K>, client: C) -> Self {
        AddEventService { resolver, client }
    }

    /// Run the add command and return the message for the invoker.
    pub async fn add_event<A: AsRef<str>>(&self, user_id: &str, args: &[A]) -> String {
        match self.try_add_event(user_id, args).await {
            Ok(confirmation) => confirmation.to_string(),
            Err(e) => e.to_string(),
        }
    }

    pub async fn try_add_event<A: AsRef<str>>(
        &self,
        user_id: &str,
        args: &[A],
    ) -> Result<Confirmation, AddEventError> {
        let resolved = self.resolver.resolve(user_id, args).inspect_err(|e| {
            log::warn!("Rejected add-event request from {}: {} ({:?})", user_id, e, e);
        })?;

        self.submit(user_id, resolved).await
    }

    /// Submit an already resolved event.
    pub async fn submit(
        &self,
        user_id: &str,
        resolved: ResolvedEvent,
    ) -> Result<Confirmation, AddEventError> {
        let event = resolved.into_new_event().inspect_err(|e| {
            log::warn!("Rejected add-event request from {}: {} ({:?})", user_id, e, e);
        })?;

        log::info!(
            "Creating event '{}' ({} to {}) as {}",
            event.summary,
            event.start,
            event.end,
            event.uid
        );

        // Single attempt; no retry
        self.client.create_event(&event).await.map_err(|e| {
            log::error!("Failed to create event '{}': {:#}", event.summary, e);
            AddEventError::Submission(e)
        })?;

        Ok(Confirmation::from(&event))
    }
}
