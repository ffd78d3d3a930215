//! Prelude module - common imports for tally-sheets users
//!
//! ```rust
//! use tally_sheets::prelude::*;
//! ```

pub use crate::{
    export_rosters, export_scoresheet, generate_rosters, generate_scoresheet,
    parse_spreadsheet_id, render_roster, render_scoresheet, BonusOutcome, CellWrite, ClearRange,
    ColumnAddress, ExportError, ExportOutcome, FormatParameters, GeneratedSheet, GeneratorError,
    MatchSnapshot, PhaseRecord, PlayerRef, Result, ScoresheetFormat, ScoringAction, ServiceAccount,
    SheetValue, SheetsClient, SheetsConfig, SheetsError, TeamNameMap, Workbook, Worksheet,
    XlsxWriter,
};
