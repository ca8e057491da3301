//! Match configuration
//!
//! Rule constants a match is created with. The defaults are the standard
//! rules; tests and tools can tighten or relax them.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub starting_health: i32,

    /// Ceiling for the per-turn max energy ratchet
    pub max_energy_cap: i32,

    /// Creatures allowed on one field
    pub field_capacity: usize,

    /// Opening draw for the player who moves first
    pub opening_draw_first: usize,

    /// Opening draw for the player who moves second
    pub opening_draw_second: usize,

    /// RNG seed for deck shuffles; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Event log verbosity for console echo
    pub verbosity: VerbosityLevel,

    /// Echo event log entries to stdout as they are recorded
    pub echo_log: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            starting_health: 30,
            max_energy_cap: 10,
            field_capacity: 7,
            opening_draw_first: 2,
            opening_draw_second: 3,
            seed: None,
            verbosity: VerbosityLevel::default(),
            echo_log: false,
        }
    }
}

impl MatchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_echo(mut self, verbosity: VerbosityLevel) -> Self {
        self.echo_log = true;
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let config = MatchConfig::default();
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.max_energy_cap, 10);
        assert_eq!(config.field_capacity, 7);
        assert_eq!((config.opening_draw_first, config.opening_draw_second), (2, 3));
        assert!(!config.echo_log);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"field_capacity": 3, "seed": 9}"#;
        let config: MatchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.field_capacity, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.starting_health, 30);
    }
}
