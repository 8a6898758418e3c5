//! Error types for the tooltip load path.

use thiserror::Error;

/// Result type alias for tooltip load operations.
pub type TooltipResult<T> = Result<T, TooltipError>;

/// Errors that can occur while loading the tooltip library.
///
/// None of these escape the service surface: a failed load degrades to an
/// empty library and is reported through `tracing`, never to the caller.
#[derive(Debug, Error)]
pub enum TooltipError {
    /// Transport-level fetch failure (connection, timeout, body read).
    #[error("library fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The library endpoint answered with a non-success status.
    #[error("library fetch for {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The fetched document is not a valid library JSON document.
    #[error("library document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
