//! The built-in scoresheet skeleton for the file backend
//!
//! The workbook layout expects team names in row 1 and player names in
//! row 3, with 28 cycle rows starting at row 4. The skeleton carries the
//! fixed furniture (header labels, cycle numbers down column A); the
//! generator's writes land on top of a fresh clone.

use tally_sheets_core::{ColumnAddress, Worksheet};

/// Row holding the team name header
const TEAM_NAME_ROW: u32 = 1;
/// Row holding the player name headers
const PLAYER_NAME_ROW: u32 = 3;
/// First cycle row
const FIRST_CYCLE_ROW: u32 = 4;
/// Number of cycle rows in the skeleton
const CYCLE_COUNT: u32 = 28;

/// An immutable workbook skeleton, cloned once per export call so
/// concurrent exports never share document state
#[derive(Debug, Clone)]
pub struct ScoresheetTemplate {
    base: Worksheet,
}

impl ScoresheetTemplate {
    /// Build the skeleton in memory
    pub fn new() -> Self {
        let mut base = Worksheet::new("");
        let label_column = ColumnAddress::FIRST;

        base.set_value(TEAM_NAME_ROW, label_column, "Team");
        base.set_value(PLAYER_NAME_ROW, label_column, "TU#");
        for cycle in 1..=CYCLE_COUNT {
            base.set_value(FIRST_CYCLE_ROW + cycle - 1, label_column, cycle as i32);
        }

        Self { base }
    }

    /// Clone the skeleton into a named worksheet
    pub fn instantiate(&self, sheet_name: &str) -> Worksheet {
        let mut sheet = self.base.clone();
        sheet.set_name(sheet_name);
        sheet
    }
}

impl Default for ScoresheetTemplate {
    fn default() -> Self {
        Self::new()
    }
}
