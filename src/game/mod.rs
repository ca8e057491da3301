//! Match engine: turn state machine, actions and their resolution

pub mod actions;
pub mod combat;
pub mod config;
pub mod effects;
pub mod logger;
pub mod phase;
pub mod snapshot;
pub mod state;

pub use actions::{ActionRejected, GameAction};
pub use combat::CombatOutcome;
pub use config::MatchConfig;
pub use effects::{ArtifactEffect, SpellEffect};
pub use logger::{GameLogger, LogEntry, VerbosityLevel};
pub use phase::{PlayerSeat, TurnState, TurnStructure};
pub use snapshot::{
    CreatureData, PlayerData, Snapshot, SnapshotHeader, SNAPSHOT_VERSION, STAT_LIMIT,
};
pub use state::Match;
