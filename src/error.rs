//! Unified error types for the order tracking service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Data-source error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching or parsing upstream order data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The Sheets API request failed outright.
    #[error("failed to fetch worksheet {worksheet}: {reason}")]
    FetchFailed {
        /// Worksheet that was requested.
        worksheet: String,
        /// Reason for failure.
        reason: String,
    },

    /// The worksheet exists but contains no order rows.
    #[error("worksheet {worksheet} returned no order rows")]
    EmptyWorksheet {
        /// Worksheet that was requested.
        worksheet: String,
    },

    /// A required column is missing from the header row.
    #[error("required column {name:?} missing from header row")]
    MissingColumn {
        /// Column header that could not be found.
        name: String,
    },

    /// Failed to parse the upstream response.
    #[error("failed to parse sheet data: {0}")]
    ParseError(String),

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
