//! Persistence service: live match <-> snapshot, and the save directory
//!
//! Restoring resolves every stored name through the catalog. Names the
//! catalog no longer knows become 1/1 Neutral stub creatures instead of
//! failing the whole load.

use crate::core::{Card, Faction, Player};
use crate::game::{
    CreatureData, Match, MatchConfig, PlayerData, PlayerSeat, Snapshot, SnapshotHeader,
    TurnStructure, SNAPSHOT_VERSION,
};
use crate::loader::Catalog;
use crate::zones::{CardZone, Zone};
use crate::{CcgError, Result};
use chrono::{DateTime, Local, Utc};
use std::path::{Path, PathBuf};

/// Suffix appended to the name of a stub card
pub const RESTORED_SUFFIX: &str = " (restored)";

/// Converts matches to snapshots and back
#[derive(Debug, Clone, Copy)]
pub struct PersistenceService<'a> {
    catalog: &'a Catalog,
}

impl<'a> PersistenceService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        PersistenceService { catalog }
    }

    /// Capture a match; only field creatures keep their mutable stats
    pub fn snapshot(&self, game: &Match) -> Snapshot {
        let (p1, p2) = (game.player1(), game.player2());
        Snapshot {
            version: SNAPSHOT_VERSION,
            save_date: Utc::now(),
            player1_name: p1.name.clone(),
            player1_faction: p1.faction,
            player2_name: p2.name.clone(),
            player2_faction: p2.faction,
            current_turn: game.turn_number(),
            is_player1_turn: game.is_player1_turn(),
            player1_data: player_data(p1),
            player2_data: player_data(p2),
            graveyard: zone_names(game.graveyard()),
        }
    }

    /// Rebuild a match with standard rules
    pub fn restore(&self, snapshot: &Snapshot) -> Result<Match> {
        self.restore_with_config(snapshot, MatchConfig::default())
    }

    /// Rebuild a match from a snapshot
    ///
    /// The result is not over and its event log starts with a load header.
    pub fn restore_with_config(&self, snapshot: &Snapshot, config: MatchConfig) -> Result<Match> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CcgError::IncompatibleVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        snapshot.validate()?;

        let mut notes = Vec::new();
        let player1 = self.restore_player(&snapshot.player1_data, &mut notes);
        let player2 = self.restore_player(&snapshot.player2_data, &mut notes);
        let graveyard = CardZone::with_cards(
            Zone::Graveyard,
            snapshot
                .graveyard
                .iter()
                .map(|name| self.resolve(name, &mut notes))
                .collect(),
        );

        let turn = TurnStructure {
            turn_number: snapshot.current_turn,
            current: if snapshot.is_player1_turn {
                PlayerSeat::First
            } else {
                PlayerSeat::Second
            },
        };

        let mut game = Match::from_parts([player1, player2], turn, graveyard, config);
        game.logger.minimal("=== GAME LOADED ===");
        let msg = format!(
            "Turn: {}, current player: {}",
            game.turn_number(),
            game.current_player().name
        );
        game.logger.normal(msg);
        game.logger
            .normal(format!("Saved: {}", snapshot.save_date.format("%Y-%m-%d %H:%M:%S UTC")));
        for note in notes {
            game.logger.verbose(note);
        }
        Ok(game)
    }

    pub fn save<P: AsRef<Path>>(&self, game: &Match, path: P) -> Result<()> {
        self.snapshot(game).save_to_file(path)
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Match> {
        let snapshot = Snapshot::load_from_file(path)?;
        self.restore(&snapshot)
    }

    fn restore_player(&self, data: &PlayerData, notes: &mut Vec<String>) -> Player {
        let mut player = Player::new(data.name.clone(), data.faction, data.health);
        player.energy = data.energy;
        player.max_energy = data.max_energy;

        for name in &data.deck {
            player.deck.add(self.resolve(name, notes));
        }
        for name in &data.hand {
            player.hand.add(self.resolve(name, notes));
        }
        for creature in &data.field {
            if let Some(card) = self.restore_creature(creature, notes) {
                player.field.add(card);
            }
        }
        for name in &data.artifacts {
            match self.catalog.create(name) {
                Ok(mut card) if card.artifact().is_some() => {
                    if let Some(stats) = card.artifact_mut() {
                        stats.activate();
                    }
                    player.artifacts.add(card);
                }
                _ => notes.push(format!("Dropped unknown artifact '{name}' for {}", data.name)),
            }
        }

        player
    }

    /// Template creature with the stored battlefield stats laid over it
    ///
    /// A name the catalog does not know becomes a fresh stub that keeps only
    /// the stored max health. A known card that is not a creature is dropped.
    fn restore_creature(&self, data: &CreatureData, notes: &mut Vec<String>) -> Option<Card> {
        let mut card = match self.catalog.create(&data.name) {
            Ok(card) if card.is_creature() => card,
            Ok(_) => {
                notes.push(format!("Dropped non-creature '{}' from the field", data.name));
                return None;
            }
            Err(_) => {
                notes.push(format!("Unknown creature '{}' restored as a stub", data.name));
                let mut stub = stub_card(&data.name);
                if let Some(stats) = stub.creature_mut() {
                    if data.max_health > 0 {
                        stats.set_max_health(data.max_health);
                    }
                }
                return Some(stub);
            }
        };

        if let Some(stats) = card.creature_mut() {
            stats.attack = data.attack;
            // Max first, so the stored current health is not clamped to the template max
            stats.set_max_health(data.max_health);
            stats.set_current_health(data.current_health);
            stats.state = data.state;
        }
        Some(card)
    }

    fn resolve(&self, name: &str, notes: &mut Vec<String>) -> Card {
        self.catalog.create(name).unwrap_or_else(|_| {
            notes.push(format!("Unknown card '{name}' restored as a stub"));
            stub_card(name)
        })
    }
}

/// 1/1 Neutral creature standing in for a card the catalog no longer knows
pub fn stub_card(name: &str) -> Card {
    Card::new_creature(format!("{name}{RESTORED_SUFFIX}"), Faction::Neutral, 1, 1, 1)
        .with_text("This card was restored from a save file")
        .with_lore("Restored card")
}

fn zone_names(zone: &CardZone) -> Vec<String> {
    zone.iter().map(|card| card.name.to_string()).collect()
}

fn player_data(player: &Player) -> PlayerData {
    PlayerData {
        name: player.name.clone(),
        faction: player.faction,
        health: player.health,
        energy: player.energy,
        max_energy: player.max_energy,
        deck: zone_names(&player.deck),
        hand: zone_names(&player.hand),
        field: player
            .field
            .iter()
            .filter_map(|card| {
                card.creature().map(|stats| CreatureData {
                    name: card.name.to_string(),
                    attack: stats.attack,
                    current_health: stats.current_health(),
                    max_health: stats.max_health(),
                    state: stats.state,
                })
            })
            .collect(),
        artifacts: zone_names(&player.artifacts),
    }
}

/// Listing entry for one save file
#[derive(Debug, Clone)]
pub struct SaveInfo {
    /// File stem, the name used to save and delete
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// `None` when the file could not be read as a snapshot
    pub header: Option<SnapshotHeader>,
}

/// A directory of named `.json` saves
#[derive(Debug, Clone)]
pub struct SaveDirectory {
    root: PathBuf,
}

impl SaveDirectory {
    pub const EXTENSION: &'static str = "json";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        SaveDirectory { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `save_<YYYYmmdd_HHMMSS>` in local time
    pub fn default_save_name() -> String {
        Self::save_name_at(Local::now())
    }

    pub fn save_name_at<Tz: chrono::TimeZone>(when: DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("save_{}", when.format("%Y%m%d_%H%M%S"))
    }

    /// Path of the save called `name`; path separators are flattened
    pub fn path_for(&self, name: &str) -> PathBuf {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        let clean: String = stem
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.root.join(format!("{clean}.{}", Self::EXTENSION))
    }

    /// Write a snapshot under `name`, or a timestamped default name
    pub fn save(&self, snapshot: &Snapshot, name: Option<&str>) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.root)?;
        let name = name.map_or_else(Self::default_save_name, str::to_string);
        let path = self.path_for(&name);
        snapshot.save_to_file(&path)?;
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Snapshot> {
        Snapshot::load_from_file(self.path_for(name))
    }

    /// Every `.json` save, most recently modified first
    ///
    /// A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<SaveInfo>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut saves = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(Self::EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };

            let metadata = std::fs::metadata(&path)?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(std::time::UNIX_EPOCH);
            let modified = DateTime::<Utc>::from(modified);

            saves.push(SaveInfo {
                name,
                size: metadata.len(),
                modified,
                header: SnapshotHeader::read_from_file(&path).ok(),
                path,
            });
        }

        saves.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
        Ok(saves)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CcgError::SaveNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
