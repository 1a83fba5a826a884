//! Error handling for the vaccination tracker.

use std::io;

/// Specialized error type for calendar, store, and configuration operations
#[derive(Debug, thiserror::Error)]
pub enum VaxTrackError {
    /// Error reading a calendar file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a calendar file
    #[error("Calendar parse error: {0}")]
    CalendarParse(#[from] serde_json::Error),

    /// Error in the configured dose-rule table
    #[error("Calendar error: {0}")]
    Calendar(String),

    /// Error from the session store
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, VaxTrackError>;
