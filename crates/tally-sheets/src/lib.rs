//! # tally-sheets
//!
//! Scoresheet export for trivia matches: turns a match's scoring history
//! into spreadsheet cell writes and delivers them to either a cloud
//! spreadsheet (batched REST updates) or an XLSX file.
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let snapshot = MatchSnapshot {
//!     players: vec![
//!         PlayerRef::new("p1", "Alice", "t1"),
//!         PlayerRef::new("p2", "Bob", "t2"),
//!     ],
//!     phases: vec![PhaseRecord {
//!         actions: vec![ScoringAction::new("p1", 10)],
//!         bonus: Some(BonusOutcome::new("t1", vec![10, 0, 10])),
//!     }],
//!     ..Default::default()
//! };
//!
//! let params = ScoresheetFormat::CloudTotals.parameters();
//! let sheet = generate_scoresheet(&snapshot, &params, 1).unwrap();
//! assert_eq!(sheet.sheet, "ROUND 1");
//! ```

pub mod prelude;

use thiserror::Error;
use tracing::info;

// Re-export the data model
pub use tally_sheets_core::{
    BonusOutcome, CellWrite, ClearRange, ColumnAddress, MatchSnapshot, PhaseRecord, PlayerRef,
    ScoringAction, SheetValue, TeamNameMap, Workbook, Worksheet,
};

// Re-export generation
pub use tally_sheets_gen::{
    generate_rosters, generate_scoresheet, FormatParameters, GeneratedSheet, GeneratorError,
    ScoresheetFormat,
};

// Re-export the backends
pub use tally_sheets_gsheets::{
    parse_spreadsheet_id, ServiceAccount, SheetsClient, SheetsConfig, SheetsError,
};
pub use tally_sheets_xlsx::{render_roster, render_scoresheet, XlsxError, XlsxWriter};

/// Result type alias using [`ExportError`]
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced by the high-level export entry points
#[derive(Debug, Error)]
pub enum ExportError {
    /// The match's shape does not fit the chosen layout
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// The cloud write-back failed
    #[error(transparent)]
    Sheets(#[from] SheetsError),

    /// The XLSX package could not be produced
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// A cloud format was chosen but no document URL was given
    #[error("This format exports to a cloud spreadsheet; a document URL is required")]
    MissingTarget,
}

/// What an export produced: a user-facing message, plus the serialized
/// workbook when the format writes to a file instead of the cloud
#[derive(Debug)]
pub struct ExportOutcome {
    /// Success message, with the trim advisory appended when phases were
    /// dropped to fit the layout
    pub message: String,
    /// XLSX bytes for file formats; `None` for cloud formats
    pub workbook: Option<Vec<u8>>,
}

fn with_advisory(mut message: String, trimmed: bool) -> String {
    if trimmed {
        message.push_str(GeneratedSheet::TRIM_ADVISORY);
    }
    message
}

/// Export one round's scoresheet in the given format.
///
/// Cloud formats need a `target` document URL and a configured `client`;
/// the file format needs neither and returns the workbook bytes in the
/// outcome.
pub async fn export_scoresheet(
    snapshot: &MatchSnapshot,
    format: ScoresheetFormat,
    round: u32,
    target: Option<&str>,
    client: &SheetsClient,
) -> Result<ExportOutcome> {
    let params = format.parameters();
    let sheet = generate_scoresheet(snapshot, &params, round)?;

    let outcome = match format {
        ScoresheetFormat::FileWorkbook => {
            let bytes = render_scoresheet(&sheet.writes, &sheet.sheet)?;
            ExportOutcome {
                message: with_advisory(
                    format!("Round {round} scoresheet exported."),
                    sheet.trimmed,
                ),
                workbook: Some(bytes),
            }
        }
        ScoresheetFormat::CloudTotals | ScoresheetFormat::CloudParts => {
            let target = target.ok_or(ExportError::MissingTarget)?;
            client.update(&sheet.writes, &sheet.clears, target).await?;
            ExportOutcome {
                message: with_advisory(format!("Round {round} scoresheet updated."), sheet.trimmed),
                workbook: None,
            }
        }
    };

    info!(round, ?format, "scoresheet export finished");
    Ok(outcome)
}

/// Export the team rosters in the given format, with the same dispatch
/// rules as [`export_scoresheet`].
pub async fn export_rosters(
    players: &[PlayerRef],
    team_names: &TeamNameMap,
    format: ScoresheetFormat,
    target: Option<&str>,
    client: &SheetsClient,
) -> Result<ExportOutcome> {
    let params = format.parameters();
    let sheet = generate_rosters(players, team_names, &params)?;

    let outcome = match format {
        ScoresheetFormat::FileWorkbook => {
            let bytes = render_roster(&sheet.writes, &sheet.sheet)?;
            ExportOutcome {
                message: "Rosters exported.".to_string(),
                workbook: Some(bytes),
            }
        }
        ScoresheetFormat::CloudTotals | ScoresheetFormat::CloudParts => {
            let target = target.ok_or(ExportError::MissingTarget)?;
            client.update(&sheet.writes, &sheet.clears, target).await?;
            ExportOutcome {
                message: "Rosters updated.".to_string(),
                workbook: None,
            }
        }
    };

    info!(?format, "roster export finished");
    Ok(outcome)
}
