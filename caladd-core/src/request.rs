//! The unresolved five-argument request.

use crate::error::AddEventError;

/// Raw positional arguments: `name start-date start-time end-date end-time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventRequest {
    pub event_name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl RawEventRequest {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, AddEventError> {
        let [event_name, start_date, start_time, end_date, end_time] = args else {
            return Err(AddEventError::ArgumentCount(args.len()));
        };

        Ok(RawEventRequest {
            event_name: event_name.as_ref().to_string(),
            start_date: start_date.as_ref().to_string(),
            start_time: start_time.as_ref().to_string(),
            end_date: end_date.as_ref().to_string(),
            end_time: end_time.as_ref().to_string(),
        })
    }
}
