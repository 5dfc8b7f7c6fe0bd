//! Core types for caladd.
//!
//! This crate turns the compact `name start-date start-time end-date end-time`
//! shorthand into a resolved event and hands it to a calendar client:
//! - `offset` parses `+15m` / `-1h` style offsets
//! - `field` models the `!` placeholder and the end-time forms
//! - `resolver` applies the placeholder rules in order
//! - `service` runs a full add-event invocation against a `CalendarClient`

pub mod calendar;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod field;
pub mod ics;
pub mod offset;
pub mod request;
pub mod resolver;
pub mod service;
pub mod settings;

pub use event::{NewEvent, ResolvedEvent};
pub use offset::{Offset, parse_offset};
pub use resolver::Resolver;
pub use service::AddEventService;
