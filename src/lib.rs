//! RF CCG - rules engine for a two-player collectible card game
//!
//! Owns card definitions, player state, turn progression, combat
//! resolution and the save/load contract that lets a match be paused
//! and resumed.

pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod persistence;
pub mod zones;

pub use error::{CcgError, Result};
