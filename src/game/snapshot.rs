//! Persisted match snapshot
//!
//! Cards are stored by catalog name. Only creatures on the field keep their
//! mutable stats; everything else is rebuilt from its template on load.

use crate::core::{CreatureState, Faction};
use crate::{CcgError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Schema version written by and accepted from this build
pub const SNAPSHOT_VERSION: u32 = 1;

/// Largest magnitude accepted for any stored health, energy or attack value
pub const STAT_LIMIT: i32 = 1_000_000;

/// Battlefield state of one creature on the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    pub attack: i32,
    pub current_health: i32,
    pub max_health: i32,
    pub state: CreatureState,
}

/// One player's persisted state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub faction: Faction,
    pub health: i32,
    pub energy: i32,
    pub max_energy: i32,
    /// Front of the deck first
    pub deck: Vec<String>,
    pub hand: Vec<String>,
    pub field: Vec<CreatureData>,
    pub artifacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub save_date: DateTime<Utc>,
    pub player1_name: String,
    pub player1_faction: Faction,
    pub player2_name: String,
    pub player2_faction: Faction,
    pub current_turn: u32,
    pub is_player1_turn: bool,
    pub player1_data: PlayerData,
    pub player2_data: PlayerData,
    pub graveyard: Vec<String>,
}

/// The few fields needed to describe a save without rebuilding it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotHeader {
    pub version: u32,
    pub save_date: Option<DateTime<Utc>>,
    pub player1_name: String,
    pub player2_name: String,
    pub current_turn: u32,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl Snapshot {
    /// Save snapshot to a file as pretty JSON
    ///
    /// The document is written to `<path>.tmp` first and renamed over `path`,
    /// so an existing file is either fully replaced or left untouched.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CcgError::SerializationError(e.to_string()))?;

        let tmp = temp_path(path);
        std::fs::write(&tmp, json)?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Load snapshot from a file
    ///
    /// The schema version is checked before the rest of the document is
    /// interpreted.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = read_snapshot_text(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let probe: VersionProbe =
            serde_json::from_str(json).map_err(|e| CcgError::MalformedSnapshot(e.to_string()))?;
        if probe.version != SNAPSHOT_VERSION {
            return Err(CcgError::IncompatibleVersion {
                found: probe.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        serde_json::from_str(json).map_err(|e| CcgError::MalformedSnapshot(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CcgError::SerializationError(e.to_string()))
    }

    pub fn player_data(&self) -> [&PlayerData; 2] {
        [&self.player1_data, &self.player2_data]
    }

    /// Reject numbers no live match could have produced
    ///
    /// Player values must lie in `0..=STAT_LIMIT`. Creature attack and
    /// current health may be negative but stay within `STAT_LIMIT` in
    /// magnitude, and max health must be at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.current_turn == 0 {
            return Err(CcgError::MalformedSnapshot(
                "current_turn must be at least 1".to_string(),
            ));
        }
        for data in self.player_data() {
            check_range(&data.name, "health", data.health, 0)?;
            check_range(&data.name, "energy", data.energy, 0)?;
            check_range(&data.name, "max_energy", data.max_energy, 0)?;
            for creature in &data.field {
                let name = creature.name.as_str();
                check_range(name, "attack", creature.attack, -STAT_LIMIT)?;
                check_range(name, "current_health", creature.current_health, -STAT_LIMIT)?;
                check_range(name, "max_health", creature.max_health, 1)?;
            }
        }
        Ok(())
    }
}

fn check_range(owner: &str, field: &str, value: i32, min: i32) -> Result<()> {
    if (min..=STAT_LIMIT).contains(&value) {
        Ok(())
    } else {
        Err(CcgError::MalformedSnapshot(format!(
            "{owner}: {field} {value} outside {min}..={STAT_LIMIT}"
        )))
    }
}

impl SnapshotHeader {
    /// Read just the header fields of a save; any version is accepted
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = read_snapshot_text(path.as_ref())?;
        serde_json::from_str(&json).map_err(|e| CcgError::MalformedSnapshot(e.to_string()))
    }
}

fn read_snapshot_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CcgError::SnapshotNotFound(path.to_path_buf()),
        _ => CcgError::IoError(e),
    })
}

/// `<path>.tmp`, next to `path`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        let player = |name: &str, faction| PlayerData {
            name: name.to_string(),
            faction,
            health: 30,
            energy: 1,
            max_energy: 1,
            deck: vec!["Cora Novice".into()],
            hand: vec![],
            field: vec![CreatureData {
                name: "Cora Priest".into(),
                attack: 1,
                current_health: 2,
                max_health: 4,
                state: CreatureState::Exhausted,
            }],
            artifacts: vec![],
        };
        Snapshot {
            version: SNAPSHOT_VERSION,
            save_date: Utc::now(),
            player1_name: "Alice".into(),
            player1_faction: Faction::Cora,
            player2_name: "Bob".into(),
            player2_faction: Faction::Bellato,
            current_turn: 3,
            is_player1_turn: false,
            player1_data: player("Alice", Faction::Cora),
            player2_data: player("Bob", Faction::Bellato),
            graveyard: vec!["Dark Blast".into()],
        }
    }

    fn temp_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rf_ccg_snapshot_{}_{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_enums_serialize_by_name() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"player1_faction\": \"Cora\""));
        assert!(json.contains("\"state\": \"Exhausted\""));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("roundtrip");
        let snapshot = sample();
        snapshot.save_to_file(&path).unwrap();

        assert!(!temp_path(&path).exists());
        let loaded = Snapshot::load_from_file(&path).unwrap();
        assert_eq!(loaded, snapshot);

        let header = SnapshotHeader::read_from_file(&path).unwrap();
        assert_eq!(header.player2_name, "Bob");
        assert_eq!(header.current_turn, 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = temp_file("missing");
        let err = Snapshot::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CcgError::SnapshotNotFound(p) if p == path));
    }

    #[test]
    fn test_wrong_version_rejected_before_parsing() {
        let err = Snapshot::from_json(r#"{"version": 2, "anything": true}"#).unwrap_err();
        assert!(matches!(
            err,
            CcgError::IncompatibleVersion {
                found: 2,
                expected: SNAPSHOT_VERSION
            }
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(CcgError::MalformedSnapshot(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"version": 1}"#),
            Err(CcgError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(sample().validate().is_ok());

        let mut snapshot = sample();
        snapshot.player2_data.max_energy = i32::MAX;
        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, CcgError::MalformedSnapshot(msg) if msg.contains("max_energy")));

        let mut snapshot = sample();
        snapshot.player1_data.field[0].attack = i32::MIN;
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample();
        snapshot.player1_data.field[0].max_health = 0;
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample();
        snapshot.current_turn = 0;
        assert!(snapshot.validate().is_err());

        // Wounded below zero is a state a live match can reach
        let mut snapshot = sample();
        snapshot.player1_data.field[0].current_health = -3;
        assert!(snapshot.validate().is_ok());
    }
}
