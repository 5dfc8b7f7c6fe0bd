use std::process::ExitCode;

use anyhow::{Context, Result};
use caladd_core::clock::SystemClock;
use caladd_core::config::AppConfig;
use caladd_core::settings::StaticSettings;
use caladd_core::{AddEventService, Resolver};
use caladd_provider_caldav::CalDavCalendar;
use owo_colors::OwoColorize;

fn resolver(config: &AppConfig) -> Resolver<StaticSettings, SystemClock> {
    Resolver::new(StaticSettings::new(config.defaults.clone()), SystemClock)
}

/// Resolve the arguments and submit the event to the configured calendar.
pub async fn run(config: &AppConfig, user: &str, args: &[String]) -> Result<ExitCode> {
    let caldav = config.caldav()?;
    let calendar = CalDavCalendar::new(caldav);
    log::debug!(
        "Using calendar {} on {}",
        calendar.collection_path(),
        caldav.url
    );

    let service = AddEventService::new(resolver(config), calendar);

    match service.try_add_event(user, args).await {
        Ok(confirmation) => {
            println!("{}", confirmation.to_string().green());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Resolve the arguments and print the result without contacting the server.
pub fn preview(config: &AppConfig, user: &str, args: &[String], json: bool) -> Result<ExitCode> {
    let resolver = resolver(config);

    let event = match resolver.resolve(user, args) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        let out = serde_json::to_string_pretty(&event).context("Failed to serialize event")?;
        println!("{}", out);
    } else {
        println!("  Title: {}", event.title);
        println!("  Start: {}", event.start);
        println!("  End:   {}", event.end);
        println!("  Zone:  {}", event.timezone);
    }

    Ok(ExitCode::SUCCESS)
}
