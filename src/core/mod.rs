//! Core game types and entities

pub mod card;
pub mod entity;
pub mod player;
pub mod types;

pub use card::{ArtifactStats, Card, CardKind, CreatureStats, SpellStats};
pub use entity::CardId;
pub use player::{ArtifactPlay, Player};
pub use types::{CardName, CardType, CreatureState, Faction, SpellSubtype, TargetMode};
