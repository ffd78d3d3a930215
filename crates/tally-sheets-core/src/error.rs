//! Error types for tally-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Column number outside the two-letter addressing range
    #[error("Column number {0} out of range (valid: {min}..={max})", min = crate::MIN_COLUMN, max = crate::MAX_COLUMN)]
    ColumnOutOfRange(i64),

    /// Column letters that don't form a valid one- or two-letter address
    #[error("Invalid column letters: {0}")]
    InvalidColumnLetters(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}
