//! RF CCG - Main Binary
//!
//! Browse the card catalog, start matches and manage save files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rf_ccg::{
    core::{CardType, Faction},
    game::{Match, MatchConfig, VerbosityLevel},
    loader::{Catalog, DeckStats},
    persistence::{PersistenceService, SaveDirectory},
};
use std::path::PathBuf;

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "rfccg")]
#[command(about = "RF CCG - two-player collectible card game engine", long_about = None)]
struct Cli {
    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', global = true, default_value = "normal")]
    verbosity: VerbosityArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog cards
    Cards {
        /// Only cards of this faction (Accretia, Bellato, Cora, Neutral)
        #[arg(long)]
        faction: Option<Faction>,

        /// Only cards of this kind (creature, spell, artifact)
        #[arg(long)]
        kind: Option<CardType>,
    },

    /// Show the standard deck for a faction
    Deck {
        #[arg(value_name = "FACTION")]
        faction: Faction,
    },

    /// Start a new match and print its opening state
    New {
        #[arg(long, default_value = "Player 1")]
        p1_name: String,

        #[arg(long, default_value = "Accretia")]
        p1_faction: Faction,

        #[arg(long, default_value = "Player 2")]
        p2_name: String,

        #[arg(long, default_value = "Cora")]
        p2_faction: Faction,

        /// Set random seed for deterministic shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Write the opening position to this snapshot file
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },

    /// Load a snapshot file and print the match
    Show {
        #[arg(value_name = "SAVE")]
        path: PathBuf,
    },

    /// List saves in a directory, newest first
    Saves {
        #[arg(long, default_value = "saves")]
        dir: PathBuf,
    },

    /// Delete a named save
    Delete {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(long, default_value = "saves")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity: VerbosityLevel = cli.verbosity.into();
    let catalog = Catalog::standard();

    match cli.command {
        Commands::Cards { faction, kind } => list_cards(catalog, faction, kind),
        Commands::Deck { faction } => show_deck(catalog, faction),
        Commands::New {
            p1_name,
            p1_faction,
            p2_name,
            p2_faction,
            seed,
            save,
        } => {
            let mut config = MatchConfig::default().with_echo(verbosity);
            config.seed = seed;
            let mut game =
                Match::with_config(catalog, p1_name, p1_faction, p2_name, p2_faction, config);
            game.start_game();

            println!();
            println!("{}", game.summary());
            if let Some(path) = save {
                PersistenceService::new(catalog)
                    .save(&game, &path)
                    .with_context(|| format!("Failed to save match to {}", path.display()))?;
                println!("Saved to {}", path.display());
            }
            Ok(())
        }
        Commands::Show { path } => {
            let game = PersistenceService::new(catalog)
                .load(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            if verbosity >= VerbosityLevel::Normal {
                for entry in game.event_log() {
                    println!("{entry}");
                }
                println!();
            }
            println!("{}", game.summary());
            println!("{}", game.battlefield());
            Ok(())
        }
        Commands::Saves { dir } => list_saves(&SaveDirectory::new(dir)),
        Commands::Delete { name, dir } => {
            let saves = SaveDirectory::new(dir);
            saves
                .delete(&name)
                .with_context(|| format!("Failed to delete save '{name}'"))?;
            println!("Deleted {}", saves.path_for(&name).display());
            Ok(())
        }
    }
}

fn list_cards(catalog: &Catalog, faction: Option<Faction>, kind: Option<CardType>) -> Result<()> {
    let cards = catalog
        .all_cards()
        .into_iter()
        .filter(|card| faction.map_or(true, |f| card.faction == f))
        .filter(|card| kind.map_or(true, |k| card.card_type() == k));

    let mut count = 0;
    for card in cards {
        println!("{card}");
        if !card.effect_text.is_empty() {
            println!("    {}", card.effect_text);
        }
        count += 1;
    }
    println!("\n{count} cards");
    Ok(())
}

fn show_deck(catalog: &Catalog, faction: Faction) -> Result<()> {
    let deck = catalog.standard_deck(faction);
    println!("=== {faction} standard deck ===");
    for (i, card) in deck.iter().enumerate() {
        println!("{:>2}. {card}", i + 1);
    }
    println!();
    println!("{}", DeckStats::from_cards(&deck));
    Ok(())
}

fn list_saves(saves: &SaveDirectory) -> Result<()> {
    let entries = saves
        .list()
        .with_context(|| format!("Failed to read {}", saves.root().display()))?;

    if entries.is_empty() {
        println!("No saves in {}", saves.root().display());
        return Ok(());
    }

    for info in entries {
        let modified = info.modified.format("%Y-%m-%d %H:%M:%S");
        match info.header {
            Some(header) => println!(
                "{:<24} {} vs {}, turn {}  ({} bytes, {modified})",
                info.name, header.player1_name, header.player2_name, header.current_turn, info.size
            ),
            None => println!("{:<24} (unreadable, {} bytes, {modified})", info.name, info.size),
        }
    }
    Ok(())
}
