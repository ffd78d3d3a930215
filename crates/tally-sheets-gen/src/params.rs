//! The format-parameter contract: layout constants plus behavioral hooks

use crate::error::Result;
use tally_sheets_core::{CellWrite, ColumnAddress, PhaseRecord, PlayerRef};

/// Hook that may append extra tossup writes for a phase row
/// (e.g. a dead-question marker), or suppress the row entirely.
pub type TossupHook = fn(&FormatParameters, &HookArgs<'_>) -> Result<Vec<CellWrite>>;

/// Hook that reconciles the bonus outcome of a phase row into writes.
pub type BonusHook = fn(&FormatParameters, &HookArgs<'_>) -> Result<Vec<CellWrite>>;

/// Per-phase context handed to the hooks
#[derive(Debug)]
pub struct HookArgs<'a> {
    /// The phase being emitted
    pub phase: &'a PhaseRecord,
    /// Team ids in slot order (first appearance among players)
    pub team_ids: &'a [&'a str],
    /// The full player list, for resolving an action's team
    pub players: &'a [PlayerRef],
    /// Target sheet name
    pub sheet: &'a str,
    /// The 1-based row this phase occupies
    pub row: u32,
    /// Number of retained phases
    pub phase_count: u32,
}

impl HookArgs<'_> {
    /// The 1-based phase offset within the sheet (`row - first_phase_row + 1`)
    pub fn phase_offset(&self, params: &FormatParameters) -> u32 {
        self.row - params.first_phase_row + 1
    }

    /// Whether this row is the last retained phase row
    pub fn is_last_retained_row(&self, params: &FormatParameters) -> bool {
        self.row == params.first_phase_row + self.phase_count - 1
    }

    /// Slot index of a team id within the match, if present
    pub fn team_slot(&self, team_id: &str) -> Option<usize> {
        self.team_ids.iter().position(|id| *id == team_id)
    }

    /// Team id of the player with the given id, if known
    pub fn team_of(&self, player_id: &str) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.team_id.as_str())
    }
}

/// How the roster sheet is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOrientation {
    /// Team names run down the anchor column; each team's players fill the
    /// columns to the right on the team's row
    TeamsDownColumn,
    /// Team names run across the anchor row; each team's players fill the
    /// rows below in the team's column
    TeamsAcrossRow,
}

/// Fixed geometry of a format's roster sheet
#[derive(Debug, Clone)]
pub struct RosterGeometry {
    /// Roster sheet name
    pub sheet: String,
    /// Layout direction
    pub orientation: RosterOrientation,
    /// Row of the first team entry
    pub anchor_row: u32,
    /// Column of the first team entry
    pub anchor_column: ColumnAddress,
    /// Maximum number of teams the roster sheet holds
    pub team_capacity: usize,
    /// Ranges cleared before roster writes, scoped to the roster sheet
    pub clear_ranges: Vec<String>,
}

/// Layout constants and behavioral hooks for one scoresheet format
///
/// This is the whole difference between formats: the shared generator
/// skeleton reads the constants and calls the two hooks, nothing else.
#[derive(Debug, Clone)]
pub struct FormatParameters {
    /// Sheet name prefix; round `n` targets `"{sheet_prefix}{n}"`
    pub sheet_prefix: String,
    /// Maximum players per team the layout has columns for
    pub players_per_team: usize,
    /// Number of phase rows before the sheet is full
    pub phase_row_capacity: u32,
    /// Row carrying team names
    pub team_name_row: u32,
    /// Row carrying player names
    pub player_name_row: u32,
    /// First row of phase data
    pub first_phase_row: u32,
    /// Last row for which the bonus hook runs
    pub last_bonus_row: u32,
    /// First player column per team slot
    pub starting_columns: [ColumnAddress; 2],
    /// First bonus column per team slot
    pub bonus_columns: [ColumnAddress; 2],
    /// Ranges cleared before score writes, scoped to the round sheet
    pub score_clear_ranges: Vec<String>,
    /// Roster sheet geometry
    pub roster: RosterGeometry,
    /// Per-format extra tossup behavior
    pub additional_tossup: TossupHook,
    /// Per-format bonus reconciliation
    pub bonus: BonusHook,
}

impl FormatParameters {
    /// Sheet name for a round number
    pub fn sheet_name(&self, round: u32) -> String {
        format!("{}{}", self.sheet_prefix, round)
    }
}
