//! Strongly-typed wrappers for game concepts
//!
//! Enum-valued fields serialize as their symbolic names (`"Cora"`,
//! `"Asleep"`), never as numeric codes, so save files stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card alignment group. Decks are built around one faction plus Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Accretia,
    Bellato,
    Cora,
    Neutral,
}

impl Faction {
    pub const ALL: [Faction; 4] = [
        Faction::Accretia,
        Faction::Bellato,
        Faction::Cora,
        Faction::Neutral,
    ];

    /// Factions a player may pick for a standard deck
    pub const PLAYABLE: [Faction; 3] = [Faction::Accretia, Faction::Bellato, Faction::Cora];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Accretia => "Accretia",
            Faction::Bellato => "Bellato",
            Faction::Cora => "Cora",
            Faction::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("invalid faction '{s}' (expected: accretia, bellato, cora, neutral)")
            })
    }
}

/// The three card kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Creature => "Creature",
            CardType::Spell => "Spell",
            CardType::Artifact => "Artifact",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creature" => Ok(CardType::Creature),
            "spell" => Ok(CardType::Spell),
            "artifact" => Ok(CardType::Artifact),
            _ => Err(format!(
                "invalid card kind '{s}' (expected: creature, spell, artifact)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSubtype {
    Attack,
    Healing,
    Buff,
    Other,
}

impl fmt::Display for SpellSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which creatures a spell reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMode {
    SingleTarget,
    AllEnemyCreatures,
    AllAllyCreatures,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Behavioral state of a creature on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureState {
    /// Just played, cannot act
    Asleep,
    /// Can attack
    Active,
    /// Has attacked this turn
    Exhausted,
}

impl fmt::Display for CreatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Card name (distinct from other string types)
///
/// Names are the catalog key and the only identifier a save file stores
/// for a card. Comparison between names is case-insensitive via
/// [`CardName::matches`]; `Eq` stays exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    pub fn new(s: impl Into<String>) -> Self {
        CardName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive comparison against a raw name
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        CardName(s)
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        CardName(s.to_string())
    }
}

impl AsRef<str> for CardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
