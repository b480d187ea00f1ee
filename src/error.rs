//! Error type shared by the feed loader, the reconciler and the marketplace clients.

use thiserror::Error;

/// Unified error type for sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Request did not complete within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    /// Could not connect to the remote host
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),
    /// Any other transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
    /// Marketplace answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Failed to parse a JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Failed to read a feed row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to open the downloaded feed archive
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Failed to read the stock table spreadsheet
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Feed content is unusable (no table found, empty archive, ...)
    #[error("Feed error: {0}")]
    Feed(String),
    /// Quantity descriptor is neither a sentinel nor an integer
    #[error("Invalid quantity '{value}' for product {code}")]
    InvalidQuantity { code: String, value: String },
    /// Price descriptor holds no digits before the decimal point
    #[error("Invalid price '{value}' for product {code}")]
    InvalidPrice { code: String, value: String },
    /// Required environment configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::Timeout(err)
        } else if err.is_connect() {
            SyncError::Connection(err)
        } else {
            SyncError::Http(err)
        }
    }
}

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
