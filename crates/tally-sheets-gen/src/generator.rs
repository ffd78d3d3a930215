//! The shared scoresheet generation skeleton
//!
//! Every format runs the same sequence of gates: validate the match shape,
//! trim overflowing phases, assign player columns, emit name writes, then
//! walk the phases emitting tossup and bonus writes row by row. All writes
//! are assembled in memory before any backend sees them, so a failure at
//! any gate has zero remote side effects.

use std::collections::HashMap;

use log::debug;
use tally_sheets_core::{CellWrite, ClearRange, ColumnAddress, MatchSnapshot, PhaseRecord};

use crate::error::{GeneratorError, Result};
use crate::params::{FormatParameters, HookArgs};

/// The output of one generation call, ready for a backend
#[derive(Debug, Clone)]
pub struct GeneratedSheet {
    /// Target sheet name
    pub sheet: String,
    /// Ordered cell writes
    pub writes: Vec<CellWrite>,
    /// Ranges to clear before writing
    pub clears: Vec<ClearRange>,
    /// Whether trailing phases were dropped to fit the layout
    pub trimmed: bool,
}

impl GeneratedSheet {
    /// Advisory appended to a success message when phases were dropped
    pub const TRIM_ADVISORY: &'static str =
        " Note: some phases were dropped because the scoresheet is full.";
}

/// Map every player to a column: teams in order of first appearance, players
/// within a team in consecutive columns from the team slot's starting column.
pub(crate) fn assign_columns<'a>(
    snapshot: &'a MatchSnapshot,
    team_ids: &[&str],
    params: &FormatParameters,
) -> Result<HashMap<&'a str, ColumnAddress>> {
    let mut columns = HashMap::new();
    for (slot, team_id) in team_ids.iter().enumerate() {
        let start = params.starting_columns[slot];
        for (seat, player) in snapshot.players_on(team_id).enumerate() {
            columns.insert(player.id.as_str(), start.add(seat as u32)?);
        }
    }
    Ok(columns)
}

/// Display name for a team: the name map entry, falling back to the first
/// player on the team.
pub(crate) fn team_display_name<'a>(snapshot: &'a MatchSnapshot, team_id: &str) -> &'a str {
    if let Some(name) = snapshot.team_names.get(team_id) {
        return name;
    }
    snapshot
        .players_on(team_id)
        .next()
        .map(|p| p.display_name.as_str())
        .unwrap_or_default()
}

/// Apply the trim rule: keep at most `capacity` phases, except that exactly
/// one extra phase passes through un-trimmed when it carries no scoring
/// actions (the trailing unplayed placeholder; per-format hooks decide what
/// to do with it).
pub(crate) fn trim_phases<'a>(
    phases: &'a [PhaseRecord],
    capacity: u32,
) -> (&'a [PhaseRecord], bool) {
    let n = phases.len();
    let l = capacity as usize;
    let overflows = n > l + 1
        || (n == l + 1 && phases.last().map(PhaseRecord::has_actions).unwrap_or(false));
    if overflows {
        (&phases[..l], true)
    } else {
        (phases, false)
    }
}

/// Generate the full write/clear list for one round of a match.
///
/// See the crate docs for the step-by-step contract. On success the caller
/// hands the result to a backend and appends
/// [`GeneratedSheet::TRIM_ADVISORY`] to its success message when `trimmed`
/// is set.
pub fn generate_scoresheet(
    snapshot: &MatchSnapshot,
    params: &FormatParameters,
    round: u32,
) -> Result<GeneratedSheet> {
    let team_ids = snapshot.team_ids();
    if team_ids.is_empty() || team_ids.len() > 2 {
        return Err(GeneratorError::TeamCount(team_ids.len()));
    }

    for team_id in &team_ids {
        let count = snapshot.players_on(team_id).count();
        if count > params.players_per_team {
            return Err(GeneratorError::TooManyPlayers {
                team: team_display_name(snapshot, team_id).to_string(),
                count,
                capacity: params.players_per_team,
            });
        }
    }

    let (phases, trimmed) = trim_phases(&snapshot.phases, params.phase_row_capacity);
    let columns = assign_columns(snapshot, &team_ids, params)?;
    let sheet = params.sheet_name(round);

    let mut writes = Vec::new();

    // Name rows
    for (slot, team_id) in team_ids.iter().enumerate() {
        writes.push(CellWrite::new(
            &sheet,
            params.starting_columns[slot],
            params.team_name_row,
            team_display_name(snapshot, team_id),
        ));
    }
    for player in &snapshot.players {
        if let Some(&column) = columns.get(player.id.as_str()) {
            writes.push(CellWrite::new(
                &sheet,
                column,
                params.player_name_row,
                player.display_name.as_str(),
            ));
        }
    }

    // Phase rows
    let phase_count = phases.len() as u32;
    for (index, phase) in phases.iter().enumerate() {
        let row = params.first_phase_row + index as u32;
        let offset = row - params.first_phase_row + 1;

        for action in &phase.actions {
            let column = columns.get(action.player_id.as_str()).copied().ok_or_else(|| {
                GeneratorError::UnknownPlayer {
                    player: action.player_id.clone(),
                    phase: offset,
                }
            })?;
            writes.push(CellWrite::new(&sheet, column, row, action.points));
        }

        let args = HookArgs {
            phase,
            team_ids: &team_ids,
            players: &snapshot.players,
            sheet: &sheet,
            row,
            phase_count,
        };

        writes.extend((params.additional_tossup)(params, &args)?);

        if row <= params.last_bonus_row {
            writes.extend((params.bonus)(params, &args)?);
        }
    }

    let clears = params
        .score_clear_ranges
        .iter()
        .map(|range| ClearRange::new(&sheet, range.clone()))
        .collect();

    debug!(
        "generated {} writes for sheet {sheet} ({} phases{})",
        writes.len(),
        phase_count,
        if trimmed { ", trimmed" } else { "" }
    );

    Ok(GeneratedSheet {
        sheet,
        writes,
        clears,
        trimmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_sheets_core::{PlayerRef, ScoringAction, SheetValue, TeamNameMap};

    use crate::formats::ScoresheetFormat;

    fn two_team_snapshot() -> MatchSnapshot {
        MatchSnapshot {
            players: vec![
                PlayerRef::new("p1", "Alice", "t1"),
                PlayerRef::new("p2", "Bob", "t1"),
                PlayerRef::new("p3", "Carol", "t1"),
                PlayerRef::new("p4", "Dave", "t2"),
            ],
            team_names: [("t1", "Sharks"), ("t2", "Jets")].into(),
            phases: vec![PhaseRecord {
                actions: vec![ScoringAction::new("p2", 10)],
                bonus: None,
            }],
        }
    }

    #[test]
    fn consecutive_columns_per_team() {
        let snapshot = two_team_snapshot();
        let params = ScoresheetFormat::CloudTotals.parameters();
        let team_ids = snapshot.team_ids();
        let columns = assign_columns(&snapshot, &team_ids, &params).unwrap();

        let start = params.starting_columns[0];
        assert_eq!(columns["p1"], start);
        assert_eq!(columns["p2"], start.add(1).unwrap());
        assert_eq!(columns["p3"], start.add(2).unwrap());
        assert_eq!(columns["p4"], params.starting_columns[1]);
    }

    #[test]
    fn zero_teams_rejected() {
        let snapshot = MatchSnapshot::default();
        let params = ScoresheetFormat::CloudTotals.parameters();
        let err = generate_scoresheet(&snapshot, &params, 1).unwrap_err();
        assert!(matches!(err, GeneratorError::TeamCount(0)));
    }

    #[test]
    fn three_teams_rejected() {
        let mut snapshot = two_team_snapshot();
        snapshot.players.push(PlayerRef::new("p5", "Eve", "t3"));
        let params = ScoresheetFormat::CloudTotals.parameters();
        let err = generate_scoresheet(&snapshot, &params, 1).unwrap_err();
        assert!(matches!(err, GeneratorError::TeamCount(3)));
    }

    #[test]
    fn player_capacity_enforced() {
        let mut snapshot = two_team_snapshot();
        for i in 0..7 {
            snapshot
                .players
                .push(PlayerRef::new(format!("x{i}"), format!("X{i}"), "t2"));
        }
        let params = ScoresheetFormat::CloudTotals.parameters();
        let err = generate_scoresheet(&snapshot, &params, 1).unwrap_err();
        match err {
            GeneratorError::TooManyPlayers { team, count, capacity } => {
                assert_eq!(team, "Jets");
                assert_eq!(count, 8);
                assert_eq!(capacity, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_player_fails_with_offset() {
        let mut snapshot = two_team_snapshot();
        snapshot.phases.push(PhaseRecord {
            actions: vec![ScoringAction::new("ghost", 10)],
            bonus: None,
        });
        let params = ScoresheetFormat::CloudTotals.parameters();
        let err = generate_scoresheet(&snapshot, &params, 1).unwrap_err();
        match err {
            GeneratorError::UnknownPlayer { player, phase } => {
                assert_eq!(player, "ghost");
                assert_eq!(phase, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trim_rule_cases() {
        let played = PhaseRecord {
            actions: vec![ScoringAction::new("p1", 10)],
            bonus: None,
        };

        // Under capacity: untouched
        let phases = vec![played.clone(); 5];
        let (kept, trimmed) = trim_phases(&phases, 28);
        assert_eq!(kept.len(), 5);
        assert!(!trimmed);

        // Exactly one over, final phase empty: passes through un-trimmed
        let mut phases = vec![played.clone(); 28];
        phases.push(PhaseRecord::empty());
        let (kept, trimmed) = trim_phases(&phases, 28);
        assert_eq!(kept.len(), 29);
        assert!(!trimmed);

        // Exactly one over, final phase played: trimmed
        let phases = vec![played.clone(); 29];
        let (kept, trimmed) = trim_phases(&phases, 28);
        assert_eq!(kept.len(), 28);
        assert!(trimmed);

        // Far over: trimmed
        let phases = vec![played; 40];
        let (kept, trimmed) = trim_phases(&phases, 28);
        assert_eq!(kept.len(), 28);
        assert!(trimmed);
    }

    #[test]
    fn name_rows_and_score_rows() {
        let snapshot = two_team_snapshot();
        let params = ScoresheetFormat::CloudTotals.parameters();
        let sheet = generate_scoresheet(&snapshot, &params, 3).unwrap();

        assert_eq!(sheet.sheet, "ROUND 3");
        assert!(!sheet.trimmed);
        assert!(!sheet.clears.is_empty());

        // Both team names at the team name row
        let team_writes: Vec<_> = sheet
            .writes
            .iter()
            .filter(|w| w.row == params.team_name_row)
            .collect();
        assert_eq!(team_writes.len(), 2);
        assert_eq!(team_writes[0].value, SheetValue::Text("Sharks".into()));
        assert_eq!(team_writes[1].value, SheetValue::Text("Jets".into()));

        // Bob's 10 at his column in the first phase row
        let score = sheet
            .writes
            .iter()
            .find(|w| w.row == params.first_phase_row && w.value == SheetValue::Number(10.0))
            .expect("score write");
        assert_eq!(score.column, params.starting_columns[0].add(1).unwrap());
    }

    #[test]
    fn team_name_falls_back_to_first_player() {
        let mut snapshot = two_team_snapshot();
        snapshot.team_names = TeamNameMap::new();
        assert_eq!(team_display_name(&snapshot, "t1"), "Alice");
        assert_eq!(team_display_name(&snapshot, "t2"), "Dave");
    }
}
