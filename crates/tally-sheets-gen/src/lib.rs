//! # tally-sheets-gen
//!
//! Scoresheet and roster generation: maps a match's scoring history onto the
//! cell layout of a concrete spreadsheet format.
//!
//! One shared algorithm ([`generate_scoresheet`]) does all the work; the
//! differences between layouts live in [`FormatParameters`] — a bundle of
//! layout constants plus two hook functions (bonus and additional-tossup).
//! Formats are data, not types: [`ScoresheetFormat`] selects the parameter
//! set for each of the three supported layouts.
//!
//! ```rust
//! use tally_sheets_core::{MatchSnapshot, PhaseRecord, PlayerRef, ScoringAction};
//! use tally_sheets_gen::{generate_scoresheet, ScoresheetFormat};
//!
//! let snapshot = MatchSnapshot {
//!     players: vec![PlayerRef::new("p1", "Alice", "t1")],
//!     phases: vec![PhaseRecord {
//!         actions: vec![ScoringAction::new("p1", 10)],
//!         bonus: None,
//!     }],
//!     ..Default::default()
//! };
//!
//! let params = ScoresheetFormat::CloudTotals.parameters();
//! let sheet = generate_scoresheet(&snapshot, &params, 1).unwrap();
//! assert!(!sheet.writes.is_empty());
//! ```

pub mod error;
pub mod formats;
pub mod generator;
pub mod params;
pub mod roster;

pub use error::{GeneratorError, Result};
pub use formats::ScoresheetFormat;
pub use generator::{generate_scoresheet, GeneratedSheet};
pub use params::{BonusHook, FormatParameters, HookArgs, RosterGeometry, RosterOrientation, TossupHook};
pub use roster::generate_rosters;
