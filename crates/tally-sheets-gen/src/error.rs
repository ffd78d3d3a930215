//! Error types for tally-sheets-gen

use thiserror::Error;

/// Result type alias using [`GeneratorError`]
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors raised while assembling a scoresheet or roster
///
/// All of these fire before any write leaves the process: the generator
/// assembles the full write list in memory first, so a failing export has
/// zero remote side effects.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Match has no teams or more than two
    #[error("Export only works with 1 or 2 teams, but the match has {0}")]
    TeamCount(usize),

    /// A team has more players than the layout has columns for
    #[error("Team \"{team}\" has {count} players, but this format supports at most {capacity} per team")]
    TooManyPlayers {
        team: String,
        count: usize,
        capacity: usize,
    },

    /// More teams than the roster sheet has slots for
    #[error("The roster sheet holds at most {capacity} teams, but {count} were given")]
    RosterCapacity { count: usize, capacity: usize },

    /// A scoring action names a player with no assigned column
    #[error("Unknown player \"{player}\" scored in phase {phase}")]
    UnknownPlayer { player: String, phase: u32 },

    /// A bonus names a team that isn't part of the match
    #[error("Could not resolve the team that attempted the bonus in phase {phase}")]
    UnknownBonusTeam { phase: u32 },

    /// A bonus has the wrong number of parts for this format
    #[error("Bonus in phase {phase} has {count} parts; expected exactly 3")]
    BonusPartCount { phase: u32, count: usize },

    /// A bonus total this format does not accept
    #[error("Bonus in phase {phase} totals {total}; expected 0, 10, 20, or 30")]
    BonusTotal { phase: u32, total: i32 },

    /// Column arithmetic left the addressable range
    #[error(transparent)]
    Column(#[from] tally_sheets_core::Error),
}
