//! Match state and the turn state machine

use crate::core::{Faction, Player};
use crate::game::{GameLogger, LogEntry, MatchConfig, PlayerSeat, TurnState, TurnStructure};
use crate::loader::Catalog;
use crate::zones::{CardZone, Zone};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::fmt;

/// A two-player match in progress
///
/// Owns both players, the shared graveyard and the event log. Every action
/// method either applies fully or is rejected before anything changes.
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) players: [Player; 2],

    pub(crate) turn: TurnStructure,

    pub(crate) game_over: bool,

    pub(crate) winner: Option<PlayerSeat>,

    /// Cards removed from play
    pub(crate) graveyard: CardZone,

    /// Centralized logger for match events
    pub logger: GameLogger,

    pub(crate) config: MatchConfig,

    /// Random number generator for deck shuffles
    pub(crate) rng: ChaCha12Rng,
}

impl Match {
    /// Create a match with standard rules and unshuffled standard decks
    pub fn new(
        catalog: &Catalog,
        player1_name: impl Into<String>,
        player1_faction: Faction,
        player2_name: impl Into<String>,
        player2_faction: Faction,
    ) -> Self {
        Self::with_config(
            catalog,
            player1_name,
            player1_faction,
            player2_name,
            player2_faction,
            MatchConfig::default(),
        )
    }

    pub fn with_config(
        catalog: &Catalog,
        player1_name: impl Into<String>,
        player1_faction: Faction,
        player2_name: impl Into<String>,
        player2_faction: Faction,
        config: MatchConfig,
    ) -> Self {
        let mut player1 = Player::new(player1_name, player1_faction, config.starting_health);
        let mut player2 = Player::new(player2_name, player2_faction, config.starting_health);
        player1.deck = CardZone::with_cards(Zone::Deck, catalog.standard_deck(player1_faction));
        player2.deck = CardZone::with_cards(Zone::Deck, catalog.standard_deck(player2_faction));

        let graveyard = CardZone::new(Zone::Graveyard);
        Self::from_parts([player1, player2], TurnStructure::new(), graveyard, config)
    }

    /// Assemble a match from already-built players
    ///
    /// The match is not over and its log is empty.
    pub(crate) fn from_parts(
        players: [Player; 2],
        turn: TurnStructure,
        graveyard: CardZone,
        config: MatchConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        let mut logger = if config.echo_log {
            GameLogger::with_echo(config.verbosity)
        } else {
            GameLogger::new()
        };
        logger.set_turn(turn.turn_number);

        Match {
            players,
            turn,
            game_over: false,
            winner: None,
            graveyard,
            logger,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player1(&self) -> &Player {
        &self.players[0]
    }

    pub fn player2(&self) -> &Player {
        &self.players[1]
    }

    pub fn player(&self, seat: PlayerSeat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: PlayerSeat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn current_seat(&self) -> PlayerSeat {
        self.turn.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn.current)
    }

    pub fn opponent_player(&self) -> &Player {
        self.player(self.turn.opponent())
    }

    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn is_player1_turn(&self) -> bool {
        self.turn.current == PlayerSeat::First
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner_seat(&self) -> Option<PlayerSeat> {
        self.winner
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    pub fn graveyard(&self) -> &CardZone {
        &self.graveyard
    }

    pub fn event_log(&self) -> &[LogEntry] {
        self.logger.entries()
    }

    /// Current and opponent players, mutably and at once
    pub(crate) fn seats_mut(&mut self) -> (&mut Player, &mut Player) {
        split_seats(&mut self.players, self.turn.current)
    }

    /// Shuffle both decks, deal the opening hands and begin turn 1
    pub fn start_game(&mut self) {
        if self.game_over {
            return;
        }

        for player in self.players.iter_mut() {
            player.shuffle_deck(&mut self.rng);
        }

        self.logger.set_turn(self.turn.turn_number);
        self.logger.minimal("=== GAME START ===");
        let (p1, p2) = (&self.players[0], &self.players[1]);
        let header = format!("{} ({}) vs {} ({})", p1.name, p1.faction, p2.name, p2.faction);
        self.logger.minimal(header);

        let first = self.config.opening_draw_first;
        let second = self.config.opening_draw_second;
        let drawn_first = self.players[0].draw_cards(first).len();
        let drawn_second = self.players[1].draw_cards(second).len();
        let msg = format!("{} draws {} cards", self.players[0].name, drawn_first);
        self.logger.normal(msg);
        let msg = format!("{} draws {} cards", self.players[1].name, drawn_second);
        self.logger.normal(msg);

        self.start_turn();
    }

    /// Ratchet and refill energy, wake creatures and draw for the current player
    pub fn start_turn(&mut self) {
        if self.game_over {
            return;
        }

        let cap = self.config.max_energy_cap;
        let turn_number = self.turn.turn_number;
        self.logger.set_turn(turn_number);

        let player = &mut self.players[self.turn.current.index()];
        player.max_energy = player.max_energy.saturating_add(1).min(cap);
        player.energy = player.max_energy;
        player.reset_creature_states();
        let drew = player.draw_card().is_some();

        let header = format!("=== TURN {} - {} ===", turn_number, player.name);
        let energy = format!("{}: energy {}/{}", player.name, player.energy, player.max_energy);
        let draw = if drew {
            format!("{} draws a card. Hand: {}", player.name, player.hand.len())
        } else {
            format!("{} has no cards left to draw. Hand: {}", player.name, player.hand.len())
        };

        self.logger.normal(header);
        self.logger.normal(energy);
        self.logger.verbose(draw);
    }

    /// Clear dead creatures, hand play to the other seat and start its turn
    pub fn end_turn(&mut self) {
        if self.game_over {
            return;
        }

        for i in 0..self.players.len() {
            let dead = self.players[i].cleanup_dead_creatures();
            for card in dead {
                let msg = format!("{} dies and goes to the graveyard", card.name);
                self.logger.verbose(msg);
                self.graveyard.add(card);
            }
        }

        self.turn.advance();
        self.start_turn();
    }

    /// Declare the match over; later calls change nothing
    pub fn end_game(&mut self, winner: PlayerSeat) {
        if self.game_over {
            return;
        }

        self.game_over = true;
        self.winner = Some(winner);
        self.logger.minimal("=== GAME OVER ===");
        let msg = format!("Winner: {}!", self.player(winner).name);
        self.logger.minimal(msg);
    }

    /// Text report of turn, whose move it is and both players, current first
    pub fn summary(&self) -> String {
        SummaryReport(self).to_string()
    }

    /// Text report of both fields, current player first
    pub fn battlefield(&self) -> String {
        BattlefieldReport(self).to_string()
    }
}

struct SummaryReport<'a>(&'a Match);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let current = game.current_player();

        writeln!(f, "=== GAME STATE ===")?;
        writeln!(f, "Turn: {}", game.turn.turn_number)?;
        writeln!(f, "Current player: {}", current.name)?;
        if let Some(winner) = game.winner() {
            writeln!(f, "Winner: {}", winner.name)?;
        }
        for player in [current, game.opponent_player()] {
            writeln!(f)?;
            writeln!(f, "{}:", player.name)?;
            writeln!(f, "  Health: {}", player.health)?;
            writeln!(f, "  Energy: {}/{}", player.energy, player.max_energy)?;
            writeln!(f, "  Cards in hand: {}", player.hand.len())?;
            writeln!(f, "  Creatures on field: {}", player.alive_creature_count())?;
        }
        Ok(())
    }
}

struct BattlefieldReport<'a>(&'a Match);

impl fmt::Display for BattlefieldReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "=== BATTLEFIELD ===")?;

        let sides = [
            (game.current_player(), "your field"),
            (game.opponent_player(), "opponent's field"),
        ];
        for (player, label) in sides {
            writeln!(f)?;
            writeln!(f, "{} ({label}):", player.name)?;
            let mut creatures = player
                .field
                .iter()
                .filter_map(|card| card.creature().map(|stats| (card, stats)))
                .peekable();
            if creatures.peek().is_none() {
                writeln!(f, "  No creatures")?;
            }
            for (card, stats) in creatures {
                writeln!(
                    f,
                    "  {} ({}/{}) [{}]",
                    card.name,
                    stats.attack,
                    stats.current_health(),
                    stats.state
                )?;
            }
        }
        Ok(())
    }
}

/// Split the two seats into (seat, other) mutable borrows
pub(crate) fn split_seats(
    players: &mut [Player; 2],
    seat: PlayerSeat,
) -> (&mut Player, &mut Player) {
    let [first, second] = players;
    match seat {
        PlayerSeat::First => (first, second),
        PlayerSeat::Second => (second, first),
    }
}
