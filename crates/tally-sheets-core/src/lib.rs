//! # tally-sheets-core
//!
//! Core data structures for the tally-sheets scoresheet exporter.
//!
//! This crate provides the fundamental types used throughout tally-sheets:
//! - [`ColumnAddress`] - Spreadsheet column algebra in the two-letter scheme
//! - [`CellWrite`] and [`ClearRange`] - Cell-write instructions ready for a backend
//! - [`MatchSnapshot`] and friends - The read-only scoring-history input
//! - [`Workbook`], [`Worksheet`] - The in-memory document used by the file backend
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::{CellWrite, ColumnAddress, SheetValue};
//!
//! let col = ColumnAddress::new(3).unwrap();
//! assert_eq!(col.to_string(), "C");
//!
//! let write = CellWrite::new("ROUND 3", col, 4, SheetValue::from(15.0));
//! assert_eq!(write.range(), "'ROUND 3'!C4");
//! ```

pub mod column;
pub mod error;
pub mod scoring;
pub mod workbook;
pub mod write;

// Re-exports for convenience
pub use column::ColumnAddress;
pub use error::{Error, Result};
pub use scoring::{BonusOutcome, MatchSnapshot, PhaseRecord, PlayerRef, ScoringAction, TeamNameMap};
pub use workbook::{Workbook, Worksheet};
pub use write::{CellWrite, ClearRange, SheetValue};

/// Smallest valid external column number ("A")
pub const MIN_COLUMN: u32 = 1;

/// Largest valid external column number ("ZZ")
pub const MAX_COLUMN: u32 = 702;
