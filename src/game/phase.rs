//! Turn state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSeat {
    First,
    Second,
}

impl PlayerSeat {
    pub fn other(self) -> PlayerSeat {
        match self {
            PlayerSeat::First => PlayerSeat::Second,
            PlayerSeat::Second => PlayerSeat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerSeat::First => 0,
            PlayerSeat::Second => 1,
        }
    }
}

/// Whose turn it is
///
/// There is no terminal turn state; game over is a separate flag on the
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Player1Turn,
    Player2Turn,
}

impl From<PlayerSeat> for TurnState {
    fn from(seat: PlayerSeat) -> Self {
        match seat {
            PlayerSeat::First => TurnState::Player1Turn,
            PlayerSeat::Second => TurnState::Player2Turn,
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Represents the current turn structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStructure {
    /// Current turn number (starts at 1)
    pub turn_number: u32,

    /// Seat whose turn it is
    pub current: PlayerSeat,
}

impl TurnStructure {
    pub fn new() -> Self {
        TurnStructure {
            turn_number: 1,
            current: PlayerSeat::First,
        }
    }

    pub fn state(&self) -> TurnState {
        self.current.into()
    }

    pub fn opponent(&self) -> PlayerSeat {
        self.current.other()
    }

    /// Hand play to the other seat; the turn number advances only when play
    /// returns to the first seat
    pub fn advance(&mut self) {
        self.current = self.current.other();
        if self.current == PlayerSeat::First {
            self.turn_number = self.turn_number.saturating_add(1);
        }
    }
}

impl Default for TurnStructure {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_starts_with_player_one() {
        let turn = TurnStructure::new();
        assert_eq!(turn.turn_number, 1);
        assert_eq!(turn.state(), TurnState::Player1Turn);
        assert_eq!(turn.opponent(), PlayerSeat::Second);
    }

    #[test]
    fn test_advance() {
        let mut turn = TurnStructure::new();

        turn.advance();
        assert_eq!(turn.state(), TurnState::Player2Turn);
        assert_eq!(turn.turn_number, 1);

        turn.advance();
        assert_eq!(turn.state(), TurnState::Player1Turn);
        assert_eq!(turn.turn_number, 2);
    }

    #[test]
    fn test_seat_other() {
        assert_eq!(PlayerSeat::First.other(), PlayerSeat::Second);
        assert_eq!(PlayerSeat::Second.other().index(), 0);
    }
}
