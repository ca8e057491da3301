//! Match event log
//!
//! Every engine event is recorded as a `LogEntry`; the captured buffer is the
//! match's append-only event log. Echoing to stdout is opt-in and filtered
//! by verbosity, recording is not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game start and outcome
    Minimal = 1,
    /// Normal - turns, plays and attacks (default)
    #[default]
    Normal = 2,
    /// Verbose - damage, healing, draws and cleanup
    Verbose = 3,
}

/// A single recorded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    /// Turn number the event happened on
    pub turn: u32,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    echo: bool,
    turn: u32,
    entries: Vec<LogEntry>,
}

impl GameLogger {
    /// Create a recording-only logger
    pub fn new() -> Self {
        GameLogger::default()
    }

    /// Create a logger that also echoes entries up to `verbosity` to stdout
    pub fn with_echo(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            echo: true,
            ..GameLogger::default()
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn is_echoing(&self) -> bool {
        self.echo
    }

    /// Turn number stamped on subsequent entries
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages in recording order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(needle))
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    #[inline]
    pub fn minimal(&mut self, message: impl Into<String>) {
        self.record(VerbosityLevel::Minimal, message.into());
    }

    #[inline]
    pub fn normal(&mut self, message: impl Into<String>) {
        self.record(VerbosityLevel::Normal, message.into());
    }

    #[inline]
    pub fn verbose(&mut self, message: impl Into<String>) {
        self.record(VerbosityLevel::Verbose, message.into());
    }

    fn record(&mut self, level: VerbosityLevel, message: String) {
        if self.echo && level <= self.verbosity {
            if level == VerbosityLevel::Minimal {
                println!("{message}");
            } else {
                println!("  {message}");
            }
        }
        self.entries.push(LogEntry {
            level,
            turn: self.turn,
            message,
        });
    }
}
