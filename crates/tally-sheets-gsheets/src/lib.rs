//! # tally-sheets-gsheets
//!
//! Resilient write-back client for the cloud spreadsheet service: batched
//! clear + update calls, bounded retry with backoff on rate limiting,
//! permission-failure detection, and hot-swappable credentials.
//!
//! The client owns a service handle whose lifetime spans configuration
//! epochs: [`SheetsClient::configure`] builds a complete new handle and
//! installs it with a single pointer swap, while in-flight calls keep the
//! handle they captured — including across retries.

pub mod api;
pub mod client;
pub mod error;
pub mod target;

pub use client::{ServiceAccount, SheetsClient, SheetsConfig};
pub use error::{Result, SheetsError};
pub use target::parse_spreadsheet_id;
