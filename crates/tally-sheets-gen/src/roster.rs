//! Roster writing: team and player names, independent of game scores
//!
//! Shares the format-parameter contract with the scoresheet generator but
//! targets each format's fixed roster sheet. Depending on the format's
//! orientation, teams run down a column with players across the row, or
//! across a row with players down the column.

use tally_sheets_core::{CellWrite, ClearRange, PlayerRef, TeamNameMap};

use crate::error::{GeneratorError, Result};
use crate::generator::GeneratedSheet;
use crate::params::{FormatParameters, RosterOrientation};

/// Generate the write/clear list for a format's roster sheet.
///
/// `players` carries every rostered player in encounter order; team ordering
/// follows the first appearance of each team id, as in the scoresheet
/// generator.
pub fn generate_rosters(
    players: &[PlayerRef],
    team_names: &TeamNameMap,
    params: &FormatParameters,
) -> Result<GeneratedSheet> {
    let geometry = &params.roster;

    let mut team_ids: Vec<&str> = Vec::new();
    for player in players {
        if !team_ids.contains(&player.team_id.as_str()) {
            team_ids.push(&player.team_id);
        }
    }

    if team_ids.len() > geometry.team_capacity {
        return Err(GeneratorError::RosterCapacity {
            count: team_ids.len(),
            capacity: geometry.team_capacity,
        });
    }

    for team_id in &team_ids {
        let count = players.iter().filter(|p| p.team_id == *team_id).count();
        if count > params.players_per_team {
            let first = players.iter().find(|p| p.team_id == *team_id);
            let team = team_names
                .get(team_id)
                .or(first.map(|p| p.display_name.as_str()))
                .unwrap_or_default()
                .to_string();
            return Err(GeneratorError::TooManyPlayers {
                team,
                count,
                capacity: params.players_per_team,
            });
        }
    }

    let mut writes = Vec::new();
    for (slot, team_id) in team_ids.iter().enumerate() {
        let members: Vec<&PlayerRef> = players.iter().filter(|p| p.team_id == *team_id).collect();
        let name = team_names.get(team_id).unwrap_or(&members[0].display_name);
        match geometry.orientation {
            RosterOrientation::TeamsDownColumn => {
                let row = geometry.anchor_row + slot as u32;
                writes.push(CellWrite::new(&geometry.sheet, geometry.anchor_column, row, name));
                for (seat, member) in members.iter().enumerate() {
                    writes.push(CellWrite::new(
                        &geometry.sheet,
                        geometry.anchor_column.add(seat as u32 + 1)?,
                        row,
                        member.display_name.as_str(),
                    ));
                }
            }
            RosterOrientation::TeamsAcrossRow => {
                let column = geometry.anchor_column.add(slot as u32)?;
                writes.push(CellWrite::new(
                    &geometry.sheet,
                    column,
                    geometry.anchor_row,
                    name,
                ));
                for (seat, member) in members.iter().enumerate() {
                    writes.push(CellWrite::new(
                        &geometry.sheet,
                        column,
                        geometry.anchor_row + seat as u32 + 1,
                        member.display_name.as_str(),
                    ));
                }
            }
        }
    }

    let clears = geometry
        .clear_ranges
        .iter()
        .map(|range| ClearRange::new(&geometry.sheet, range.clone()))
        .collect();

    Ok(GeneratedSheet {
        sheet: geometry.sheet.clone(),
        writes,
        clears,
        trimmed: false,
    })
}
