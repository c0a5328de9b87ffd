//! Error types for meeting-finder input construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
