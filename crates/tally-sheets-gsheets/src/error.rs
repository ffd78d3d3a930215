//! Error types for tally-sheets-gsheets

use thiserror::Error;

/// Result type alias using [`SheetsError`]
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Errors raised by the write-back client
#[derive(Debug, Error)]
pub enum SheetsError {
    /// No service handle has been configured yet
    #[error("No cloud spreadsheet credentials are configured; an admin must set them before exporting")]
    NotConfigured,

    /// The target locator does not identify a spreadsheet document
    #[error("Invalid spreadsheet target: {0}")]
    InvalidTarget(String),

    /// The batch update reported ranges with zero affected cells
    #[error("The spreadsheet was not fully updated; please try exporting again")]
    PartialUpdate,

    /// The service account lacks editor access to the document
    #[error("Permission denied. Grant editor access to \"{email}\" on the spreadsheet and try again")]
    PermissionDenied { email: String },

    /// Rate limited and the retry budget is exhausted
    #[error("The spreadsheet service rate limited this export and retries were exhausted; try again later")]
    RateLimited,

    /// Any other upstream failure, surfaced verbatim
    #[error("Spreadsheet service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("Network error talking to the spreadsheet service: {0}")]
    Network(#[from] reqwest::Error),
}

impl SheetsError {
    /// Whether the retry loop may try this failure again
    pub fn is_retryable(&self) -> bool {
        matches!(self, SheetsError::RateLimited)
    }
}
