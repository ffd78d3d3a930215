//! The three concrete formats and the selector that picks between them
//!
//! Formats are data: each variant of [`ScoresheetFormat`] builds a
//! [`FormatParameters`] value with its layout constants and hook functions.

use tally_sheets_core::{CellWrite, ColumnAddress};

use crate::error::{GeneratorError, Result};
use crate::params::{FormatParameters, HookArgs, RosterGeometry, RosterOrientation};

/// Dead-tossup marker written by the totals layout when nobody converted
pub const DEAD_TOSSUP_MARKER: &str = "DT";

/// Bonus totals a 3-part bonus may reach
const VALID_BONUS_TOTALS: [i32; 4] = [0, 10, 20, 30];

/// The supported scoresheet layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoresheetFormat {
    /// Cloud layout with a single bonus column per team holding the bonus
    /// total, and a dead-tossup marker column
    CloudTotals,
    /// Cloud layout with three checkbox sub-columns per team, one per bonus
    /// part
    CloudParts,
    /// Downloadable workbook populated from the built-in template
    FileWorkbook,
}

impl ScoresheetFormat {
    /// The parameter set for this format
    pub fn parameters(&self) -> FormatParameters {
        match self {
            ScoresheetFormat::CloudTotals => cloud_totals(),
            ScoresheetFormat::CloudParts => cloud_parts(),
            ScoresheetFormat::FileWorkbook => file_workbook(),
        }
    }
}

// Layout letters are fixed and always within A..=Z.
fn col(letter: char) -> ColumnAddress {
    ColumnAddress::from_letter(letter).expect("layout column letter")
}

fn cloud_totals() -> FormatParameters {
    FormatParameters {
        sheet_prefix: "ROUND ".to_string(),
        players_per_team: 6,
        phase_row_capacity: 28,
        team_name_row: 1,
        player_name_row: 3,
        first_phase_row: 4,
        last_bonus_row: 31,
        starting_columns: [col('B'), col('O')],
        bonus_columns: [col('H'), col('U')],
        score_clear_ranges: vec![
            "B1:G1".to_string(),
            "O1:T1".to_string(),
            "B3:G3".to_string(),
            "O3:T3".to_string(),
            "B4:H31".to_string(),
            "O4:U31".to_string(),
        ],
        roster: RosterGeometry {
            sheet: "ROSTER".to_string(),
            orientation: RosterOrientation::TeamsDownColumn,
            anchor_row: 2,
            anchor_column: col('A'),
            team_capacity: 20,
            clear_ranges: vec!["A2:G21".to_string()],
        },
        additional_tossup: totals_additional_tossup,
        bonus: totals_bonus,
    }
}

fn cloud_parts() -> FormatParameters {
    FormatParameters {
        sheet_prefix: "Round ".to_string(),
        players_per_team: 4,
        phase_row_capacity: 24,
        team_name_row: 1,
        player_name_row: 2,
        first_phase_row: 3,
        last_bonus_row: 26,
        starting_columns: [col('C'), col('M')],
        bonus_columns: [col('G'), col('Q')],
        score_clear_ranges: vec![
            "C1:F2".to_string(),
            "M1:P2".to_string(),
            "C3:I26".to_string(),
            "M3:S26".to_string(),
        ],
        roster: RosterGeometry {
            sheet: "Rosters".to_string(),
            orientation: RosterOrientation::TeamsAcrossRow,
            anchor_row: 1,
            anchor_column: col('B'),
            team_capacity: 12,
            clear_ranges: vec!["B1:M5".to_string()],
        },
        additional_tossup: no_additional_tossup,
        bonus: parts_bonus,
    }
}

fn file_workbook() -> FormatParameters {
    FormatParameters {
        sheet_prefix: "Round ".to_string(),
        players_per_team: 6,
        phase_row_capacity: 28,
        team_name_row: 1,
        player_name_row: 3,
        first_phase_row: 4,
        last_bonus_row: 31,
        starting_columns: [col('B'), col('J')],
        bonus_columns: [col('H'), col('P')],
        // A fresh template is cloned per call; nothing to clear.
        score_clear_ranges: Vec::new(),
        roster: RosterGeometry {
            sheet: "Rosters".to_string(),
            orientation: RosterOrientation::TeamsDownColumn,
            anchor_row: 2,
            anchor_column: col('A'),
            team_capacity: 20,
            clear_ranges: Vec::new(),
        },
        additional_tossup: no_additional_tossup,
        bonus: file_bonus,
    }
}

/// Hook for formats with no extra tossup output
fn no_additional_tossup(_: &FormatParameters, _: &HookArgs<'_>) -> Result<Vec<CellWrite>> {
    Ok(Vec::new())
}

/// Totals layout: suppress the trailing unplayed placeholder entirely;
/// otherwise mark a dead tossup in the first bonus column.
fn totals_additional_tossup(
    params: &FormatParameters,
    args: &HookArgs<'_>,
) -> Result<Vec<CellWrite>> {
    if args.is_last_retained_row(params) && !args.phase.has_actions() {
        return Ok(Vec::new());
    }
    if args.phase.all_non_positive() {
        return Ok(vec![CellWrite::new(
            args.sheet,
            params.bonus_columns[0],
            args.row,
            DEAD_TOSSUP_MARKER,
        )]);
    }
    Ok(Vec::new())
}

/// Totals layout: a bonus must have exactly 3 parts summing to a valid
/// total; the total goes into the owning team's bonus column.
fn totals_bonus(params: &FormatParameters, args: &HookArgs<'_>) -> Result<Vec<CellWrite>> {
    let Some(bonus) = &args.phase.bonus else {
        return Ok(Vec::new());
    };

    let offset = args.phase_offset(params);
    let slot = args
        .team_slot(&bonus.team_id)
        .ok_or(GeneratorError::UnknownBonusTeam { phase: offset })?;

    if bonus.parts.len() != 3 {
        return Err(GeneratorError::BonusPartCount {
            phase: offset,
            count: bonus.parts.len(),
        });
    }

    let total = bonus.total();
    if !VALID_BONUS_TOTALS.contains(&total) {
        return Err(GeneratorError::BonusTotal {
            phase: offset,
            total,
        });
    }

    Ok(vec![CellWrite::new(
        args.sheet,
        params.bonus_columns[slot],
        args.row,
        total,
    )])
}

/// Parts layout: one checkbox per bonus part in the owner's sub-columns,
/// and explicit FALSE in the other team's sub-columns for the same row
/// (bonus ownership is mutually exclusive per phase).
fn parts_bonus(params: &FormatParameters, args: &HookArgs<'_>) -> Result<Vec<CellWrite>> {
    let Some(bonus) = &args.phase.bonus else {
        return Ok(Vec::new());
    };

    let slot = args
        .team_slot(&bonus.team_id)
        .ok_or(GeneratorError::UnknownBonusTeam {
            phase: args.phase_offset(params),
        })?;

    let mut writes = Vec::new();
    for part in 0..3u32 {
        let answered = bonus
            .parts
            .get(part as usize)
            .map(|points| *points > 0)
            .unwrap_or(false);
        writes.push(CellWrite::new(
            args.sheet,
            params.bonus_columns[slot].add(part)?,
            args.row,
            answered,
        ));
    }

    if args.team_ids.len() == 2 {
        let other = 1 - slot;
        for part in 0..3u32 {
            writes.push(CellWrite::new(
                args.sheet,
                params.bonus_columns[other].add(part)?,
                args.row,
                false,
            ));
        }
    }

    Ok(writes)
}

/// Workbook layout: write the bonus total; when no bonus was recorded but a
/// team converted the tossup, back-fill a 0 so the bonus column is never
/// blank for a played phase. The trailing unplayed placeholder stays blank.
fn file_bonus(params: &FormatParameters, args: &HookArgs<'_>) -> Result<Vec<CellWrite>> {
    if let Some(bonus) = &args.phase.bonus {
        let slot = args
            .team_slot(&bonus.team_id)
            .ok_or(GeneratorError::UnknownBonusTeam {
                phase: args.phase_offset(params),
            })?;
        return Ok(vec![CellWrite::new(
            args.sheet,
            params.bonus_columns[slot],
            args.row,
            bonus.total(),
        )]);
    }

    if args.is_last_retained_row(params) && !args.phase.has_actions() {
        return Ok(Vec::new());
    }

    let mut writes = Vec::new();
    for action in &args.phase.actions {
        if action.points <= 0 {
            continue;
        }
        if let Some(slot) = args.team_of(&action.player_id).and_then(|t| args.team_slot(t)) {
            writes.push(CellWrite::new(
                args.sheet,
                params.bonus_columns[slot],
                args.row,
                0,
            ));
        }
    }
    Ok(writes)
}
