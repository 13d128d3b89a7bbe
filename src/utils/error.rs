//! Error handling for the epoch-processing helpers.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Moving-average window that cannot fit the epoch time span
    #[error(
        "Invalid window: cannot compute moving average with time window {twindow} s and epoch length {duration} s"
    )]
    InvalidWindow { twindow: f64, duration: f64 },

    /// Pair counting over fewer than two items
    #[error("Insufficient items: at least two items required, got {0}")]
    InsufficientItems(usize),

    /// Degenerate or inconsistent array shapes
    #[error("Shape error: {0}")]
    ShapeError(String),

    /// Invalid argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

/// Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

// Allow automatic conversion from anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
