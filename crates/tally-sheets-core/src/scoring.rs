//! Read-only scoring-history snapshot types
//!
//! These are supplied by the caller (the chat-command layer that tracks the
//! match) for a single generation call. The generator never mutates them.

use std::collections::HashMap;

/// A player taking part in the match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    /// Stable player identifier
    pub id: String,
    /// Display name written into the player-name row
    pub display_name: String,
    /// Identifier of the owning team. A lone player standing in for a team
    /// may carry their own id here.
    pub team_id: String,
}

impl PlayerRef {
    /// Create a player reference
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        team_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            team_id: team_id.into(),
        }
    }
}

/// Team identifier → display name
///
/// Teams without an assigned name may be absent; display falls back to a
/// representative player's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamNameMap {
    names: HashMap<String, String>,
}

impl TeamNameMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a display name to a team
    pub fn insert(&mut self, team_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(team_id.into(), name.into());
    }

    /// Look up a team's display name
    pub fn get(&self, team_id: &str) -> Option<&str> {
        self.names.get(team_id).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for TeamNameMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        let mut map = Self::new();
        for (id, name) in entries {
            map.insert(id, name);
        }
        map
    }
}

/// One buzz: the acting player and the signed point value awarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringAction {
    /// Id of the buzzing player
    pub player_id: String,
    /// Signed point value (negative for an interrupt penalty)
    pub points: i32,
}

impl ScoringAction {
    /// Create a scoring action
    pub fn new(player_id: impl Into<String>, points: i32) -> Self {
        Self {
            player_id: player_id.into(),
            points,
        }
    }
}

/// The bonus outcome attached to a phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusOutcome {
    /// Id of the team that attempted the bonus
    pub team_id: String,
    /// Ordered per-part point values
    pub parts: Vec<i32>,
}

impl BonusOutcome {
    /// Create a bonus outcome
    pub fn new(team_id: impl Into<String>, parts: Vec<i32>) -> Self {
        Self {
            team_id: team_id.into(),
            parts,
        }
    }

    /// Sum of all part values
    pub fn total(&self) -> i32 {
        self.parts.iter().sum()
    }
}

/// One question cycle: tossup scoring actions plus an optional bonus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseRecord {
    /// Ordered scoring actions for the tossup
    pub actions: Vec<ScoringAction>,
    /// Bonus outcome, when a team earned one
    pub bonus: Option<BonusOutcome>,
}

impl PhaseRecord {
    /// A phase with no scoring actions and no bonus (an unplayed placeholder)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any scoring action was recorded
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Whether every recorded action is non-positive (a dead tossup)
    pub fn all_non_positive(&self) -> bool {
        self.actions.iter().all(|a| a.points <= 0)
    }
}

/// The full match history consumed by one generation call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSnapshot {
    /// Players in encounter order; team ordering is derived from the first
    /// appearance of each team id here
    pub players: Vec<PlayerRef>,
    /// Team display names
    pub team_names: TeamNameMap,
    /// Phase records in play order
    pub phases: Vec<PhaseRecord>,
}

impl MatchSnapshot {
    /// Team ids in the order their players first appear
    pub fn team_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for player in &self.players {
            if !ids.contains(&player.team_id.as_str()) {
                ids.push(&player.team_id);
            }
        }
        ids
    }

    /// Players belonging to the given team, in encounter order
    pub fn players_on<'a>(&'a self, team_id: &str) -> impl Iterator<Item = &'a PlayerRef> + 'a {
        let team_id = team_id.to_string();
        self.players.iter().filter(move |p| p.team_id == team_id)
    }
}
