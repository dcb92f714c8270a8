//! Client error types

use shared::ScheduleError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with `{ "error": "..." }`
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The first menu page could not be fetched, even with the fallback page size
    #[error("Menu fetch failed on page {page} after fallback: {source}")]
    FetchFailure {
        page: u32,
        #[source]
        source: Box<ClientError>,
    },

    /// Reservation slots could not be reconciled
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Preference store read/write failed
    #[error("Preferences error: {0}")]
    Preferences(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
