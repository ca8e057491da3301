//! Snapshot round trips and save-directory management

use rf_ccg::core::{Card, CreatureState, Faction, Player};
use rf_ccg::game::{Match, MatchConfig, PlayerSeat, Snapshot, SNAPSHOT_VERSION, STAT_LIMIT};
use rf_ccg::loader::Catalog;
use rf_ccg::persistence::{PersistenceService, SaveDirectory};
use rf_ccg::CcgError;
use similar_asserts::assert_eq;
use std::path::PathBuf;

fn unique_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("rf_ccg_{tag}_{}_{nanos}", std::process::id()))
}

/// A match several turns in, with buffed and wounded creatures on both fields
fn played_match() -> Match {
    let catalog = Catalog::standard();
    let mut game = Match::with_config(
        catalog,
        "Alice",
        Faction::Cora,
        "Bob",
        Faction::Accretia,
        MatchConfig::default().with_seed(2024),
    );
    game.start_game();
    for _ in 0..5 {
        game.end_turn();
    }

    let mut guardian = catalog.create("Cora Guardian").unwrap();
    if let Some(stats) = guardian.creature_mut() {
        stats.attack = 6;
        stats.set_max_health(7);
        stats.set_current_health(6);
        stats.state = CreatureState::Exhausted;
    }
    let mut siege = catalog.create("Siege Cyborg").unwrap();
    if let Some(stats) = siege.creature_mut() {
        stats.take_damage(3);
        stats.state = CreatureState::Active;
    }
    game.player_mut(PlayerSeat::First).field.add(guardian);
    game.player_mut(PlayerSeat::Second).field.add(siege);
    game
}

type CreatureView = (String, i32, i32, i32, CreatureState);

fn field_view(player: &Player) -> Vec<CreatureView> {
    player
        .field
        .iter()
        .filter_map(|card| {
            card.creature().map(|s| {
                (
                    card.name.to_string(),
                    s.attack,
                    s.current_health(),
                    s.max_health(),
                    s.state,
                )
            })
        })
        .collect()
}

fn names(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.name.to_string()).collect()
}

#[test]
fn test_round_trip_preserves_match() {
    let service = PersistenceService::new(Catalog::standard());
    let game = played_match();

    let restored = service.restore(&service.snapshot(&game)).unwrap();

    assert_eq!(restored.turn_number(), game.turn_number());
    assert_eq!(restored.current_seat(), game.current_seat());
    for seat in [PlayerSeat::First, PlayerSeat::Second] {
        let (before, after) = (game.player(seat), restored.player(seat));
        assert_eq!(after.name, before.name);
        assert_eq!(after.faction, before.faction);
        assert_eq!(
            (after.health, after.energy, after.max_energy),
            (before.health, before.energy, before.max_energy)
        );
        assert_eq!(field_view(after), field_view(before));
        assert_eq!(names(after.hand.cards()), names(before.hand.cards()));
        assert_eq!(names(after.deck.cards()), names(before.deck.cards()));
        assert_eq!(names(after.artifacts.cards()), names(before.artifacts.cards()));
    }
    assert_eq!(names(restored.graveyard().cards()), names(game.graveyard().cards()));
}

#[test]
fn test_round_trip_through_file() {
    let dir = unique_dir("file_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("match.json");

    let service = PersistenceService::new(Catalog::standard());
    let game = played_match();
    service.save(&game, &path).unwrap();
    let restored = service.load(&path).unwrap();

    assert_eq!(field_view(restored.player1()), field_view(game.player1()));
    assert_eq!(field_view(restored.player2()), field_view(game.player2()));
    assert!(restored.logger.contains("=== GAME LOADED ==="));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"state\": \"Exhausted\""));
    assert!(text.contains("\"player1_faction\": \"Cora\""));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_restored_match_keeps_playing() {
    let service = PersistenceService::new(Catalog::standard());
    let game = played_match();
    let mut restored = service.restore(&service.snapshot(&game)).unwrap();

    let seat = restored.current_seat();
    restored.end_turn();
    assert_eq!(restored.current_seat(), seat.other());
}

#[test]
fn test_version_mismatch_is_reported() {
    let dir = unique_dir("version");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("old.json");

    let service = PersistenceService::new(Catalog::standard());
    let mut snapshot = service.snapshot(&played_match());
    snapshot.version = SNAPSHOT_VERSION + 1;
    snapshot.save_to_file(&path).unwrap();

    let err = service.load(&path).unwrap_err();
    assert!(matches!(err, CcgError::IncompatibleVersion { found: 2, expected: 1 }));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_overwrite_replaces_whole_file() {
    let dir = unique_dir("overwrite");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("slot.json");

    let service = PersistenceService::new(Catalog::standard());
    let mut snapshot = service.snapshot(&played_match());
    snapshot.save_to_file(&path).unwrap();
    snapshot.current_turn = 99;
    snapshot.save_to_file(&path).unwrap();

    assert_eq!(Snapshot::load_from_file(&path).unwrap().current_turn, 99);
    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_save_directory_lifecycle() {
    let root = unique_dir("saves");
    let saves = SaveDirectory::new(&root);
    let service = PersistenceService::new(Catalog::standard());
    let snapshot = service.snapshot(&played_match());

    let first = saves.save(&snapshot, Some("first")).unwrap();
    let auto = saves.save(&snapshot, None).unwrap();
    std::fs::write(root.join("notes.txt"), "not a save").unwrap();
    std::fs::write(root.join("broken.json"), "{").unwrap();

    assert_eq!(first, root.join("first.json"));
    let auto_name = auto.file_stem().and_then(|s| s.to_str()).unwrap();
    assert!(auto_name.starts_with("save_"));

    let listed = saves.list().unwrap();
    let mut listed_names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    listed_names.sort_unstable();
    assert_eq!(listed_names, vec!["broken", "first", auto_name]);
    assert!(listed.windows(2).all(|w| w[0].modified >= w[1].modified));

    let info = listed.iter().find(|s| s.name == "first").unwrap();
    let header = info.header.as_ref().unwrap();
    assert_eq!(header.player1_name, "Alice");
    assert_eq!(header.current_turn, snapshot.current_turn);
    assert!(info.size > 0);
    assert!(listed.iter().find(|s| s.name == "broken").unwrap().header.is_none());

    assert_eq!(saves.load("first").unwrap(), snapshot);

    saves.delete("first").unwrap();
    assert!(!first.exists());
    assert!(matches!(saves.delete("first"), Err(CcgError::SaveNotFound(name)) if name == "first"));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_out_of_range_values_are_malformed() {
    let service = PersistenceService::new(Catalog::standard());
    let mut snapshot = service.snapshot(&played_match());
    snapshot.player2_data.max_energy = i32::MAX;

    let err = service.restore(&snapshot).unwrap_err();
    assert!(matches!(err, CcgError::MalformedSnapshot(_)));

    let mut snapshot = service.snapshot(&played_match());
    if let Some(creature) = snapshot.player1_data.field.first_mut() {
        creature.attack = i32::MAX;
    }
    assert!(matches!(service.restore(&snapshot), Err(CcgError::MalformedSnapshot(_))));
}

#[test]
fn test_values_at_the_limit_keep_playing() {
    let service = PersistenceService::new(Catalog::standard());
    let mut snapshot = service.snapshot(&played_match());
    for data in [&mut snapshot.player1_data, &mut snapshot.player2_data] {
        data.health = STAT_LIMIT;
        data.energy = STAT_LIMIT;
        data.max_energy = STAT_LIMIT;
        for creature in &mut data.field {
            creature.attack = STAT_LIMIT;
            creature.max_health = STAT_LIMIT;
            creature.current_health = -STAT_LIMIT;
        }
    }

    let mut game = service.restore(&snapshot).unwrap();
    for _ in 0..4 {
        game.end_turn();
    }
    assert_eq!(game.player1().max_energy, 10);
    assert_eq!(game.player2().max_energy, 10);
    assert!(game.player1().field.is_empty());
}
