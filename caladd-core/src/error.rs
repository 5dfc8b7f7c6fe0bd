//! Error types for caladd.

use thiserror::Error;

/// Errors from parsing an offset expression such as `+15m`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("Invalid offset direction ({0}) specified.")]
    Direction(String),

    #[error("Invalid offset unit ({0}) specified.")]
    Unit(String),

    #[error("Invalid offset ({0}) specified.")]
    Magnitude(String),
}

/// Caller-facing failures of an add-event invocation.
///
/// The `Display` text of each variant is exactly what the invoker sees.
#[derive(Error, Debug)]
pub enum AddEventError {
    #[error("Invalid number of arguments specified.")]
    ArgumentCount(usize),

    #[error("Unable to load your settings.")]
    Settings(String),

    #[error("Unable to parse start date.")]
    StartDate(String),

    #[error("Unable to parse start time.")]
    StartTime(String),

    #[error("Unable to parse end date.")]
    EndDate(String),

    #[error("Unable to parse end time.")]
    EndTime(String),

    #[error("Unable to add event, got an error.")]
    Submission(#[source] anyhow::Error),
}

/// Errors from configuration and event serialization.
#[derive(Error, Debug)]
pub enum CaladdError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

pub type CaladdResult<T> = Result<T, CaladdError>;
