//! Player representation: one contestant's zones and the moves between them

use crate::core::{Card, CardId, CreatureState, Faction};
use crate::zones::{CardZone, Zone};
use serde::{Deserialize, Serialize};

pub const STARTING_HEALTH: i32 = 30;

/// Outcome of a successful artifact play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactPlay {
    /// Duration > 0: the artifact now sits active in the artifact zone
    Persistent(CardId),
    /// Duration 0: activated and handed back for one-time resolution
    OneShot(Card),
}

/// Represents a player in the game
///
/// Every card a player holds lives in exactly one of the four zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,

    pub faction: Faction,

    pub health: i32,

    pub energy: i32,

    pub max_energy: i32,

    /// Ordered, drawn from the front
    pub deck: CardZone,

    pub hand: CardZone,

    /// Ordered creatures in play
    pub field: CardZone,

    pub artifacts: CardZone,
}

impl Player {
    pub fn new(name: impl Into<String>, faction: Faction, starting_health: i32) -> Self {
        Player {
            name: name.into(),
            faction,
            health: starting_health,
            energy: 0,
            max_energy: 0,
            deck: CardZone::new(Zone::Deck),
            hand: CardZone::new(Zone::Hand),
            field: CardZone::new(Zone::Field),
            artifacts: CardZone::new(Zone::Artifacts),
        }
    }

    /// Move the front of the deck into hand
    ///
    /// An empty deck yields `None`; there is no fatigue damage.
    pub fn draw_card(&mut self) -> Option<CardId> {
        let card = self.deck.draw_front()?;
        let id = card.id;
        self.hand.add(card);
        Some(id)
    }

    /// Draw up to `count` cards, stopping early if the deck runs out
    pub fn draw_cards(&mut self, count: usize) -> Vec<CardId> {
        (0..count).map_while(|_| self.draw_card()).collect()
    }

    pub fn shuffle_deck(&mut self, rng: &mut impl rand::Rng) {
        self.deck.shuffle(rng);
    }

    fn can_afford(&self, card_id: CardId) -> bool {
        self.hand
            .get(card_id)
            .is_some_and(|card| self.energy >= card.cost)
    }

    /// Pay for a creature in hand and put it on the field, asleep
    ///
    /// Returns false (and changes nothing) unless the card is a creature in
    /// hand and the player can pay for it.
    pub fn play_creature_card(&mut self, card_id: CardId) -> bool {
        let is_creature = self.hand.get(card_id).is_some_and(Card::is_creature);
        if !is_creature || !self.can_afford(card_id) {
            return false;
        }

        let Some(mut card) = self.hand.remove(card_id) else {
            return false;
        };
        self.energy -= card.cost;
        if let Some(stats) = card.creature_mut() {
            stats.state = CreatureState::Asleep;
        }
        self.field.add(card);
        true
    }

    /// Pay for a spell in hand and take it out of the hand
    ///
    /// Resolution is the caller's job; the removed card is handed back.
    /// Returns `None` (and changes nothing) when the play is not allowed.
    pub fn play_spell_card(&mut self, card_id: CardId) -> Option<Card> {
        let is_spell = self.hand.get(card_id)?.spell().is_some();
        if !is_spell || !self.can_afford(card_id) {
            return None;
        }

        let card = self.hand.remove(card_id)?;
        self.energy -= card.cost;
        Some(card)
    }

    /// Pay for an artifact in hand and activate it
    ///
    /// Lasting artifacts move to the artifact zone. One-shot artifacts never
    /// enter it; they are returned for the caller to resolve once.
    pub fn play_artifact_card(&mut self, card_id: CardId) -> Option<ArtifactPlay> {
        let is_artifact = self.hand.get(card_id)?.artifact().is_some();
        if !is_artifact || !self.can_afford(card_id) {
            return None;
        }

        let mut card = self.hand.remove(card_id)?;
        self.energy -= card.cost;

        let one_shot = match card.artifact_mut() {
            Some(stats) => {
                stats.activate();
                stats.is_one_shot()
            }
            None => false,
        };

        if one_shot {
            Some(ArtifactPlay::OneShot(card))
        } else {
            self.artifacts.add(card);
            Some(ArtifactPlay::Persistent(card_id))
        }
    }

    /// Wake sleeping creatures and ready exhausted ones
    pub fn reset_creature_states(&mut self) {
        for stats in self.field.iter_mut().filter_map(Card::creature_mut) {
            if stats.is_alive()
                && matches!(stats.state, CreatureState::Asleep | CreatureState::Exhausted)
            {
                stats.state = CreatureState::Active;
            }
        }
    }

    /// Remove every creature at or below zero health from the field
    pub fn cleanup_dead_creatures(&mut self) -> Vec<Card> {
        self.field.extract_if(|card| !card.is_alive_creature())
    }

    pub fn alive_creature_count(&self) -> usize {
        self.alive_creatures().count()
    }

    /// Sum of attack over creatures that are alive and Active
    pub fn total_attack(&self) -> i32 {
        self.attack_ready_creatures()
            .filter_map(Card::creature)
            .map(|c| c.attack)
            .sum()
    }

    pub fn alive_creatures(&self) -> impl Iterator<Item = &Card> {
        self.field.iter().filter(|c| c.is_alive_creature())
    }

    pub fn attack_ready_creatures(&self) -> impl Iterator<Item = &Card> {
        self.field
            .iter()
            .filter(|c| c.creature().is_some_and(|s| s.can_attack()))
    }

    pub fn find_in_hand_by_name(&self, name: &str) -> Option<&Card> {
        self.hand.find_by_name(name)
    }

    pub fn has_lost(&self) -> bool {
        self.health <= 0
    }

    /// Lose health, floored at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount.max(0)).max(0);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Health: {}, Energy: {}/{}",
            self.name, self.faction, self.health, self.energy, self.max_energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SpellSubtype, TargetMode};

    fn scout() -> Card {
        Card::new_creature("Bellato Scout", Faction::Bellato, 2, 2, 2)
    }

    #[test]
    fn test_player_creation() {
        let player = Player::new("Alice", Faction::Cora, STARTING_HEALTH);

        assert_eq!(player.name, "Alice");
        assert_eq!(player.health, 30);
        assert_eq!(player.energy, 0);
        assert_eq!(player.max_energy, 0);
        assert!(player.deck.is_empty());
        assert!(!player.has_lost());
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut player = Player::new("Bob", Faction::Bellato, STARTING_HEALTH);
        assert_eq!(player.draw_card(), None);
        assert!(player.hand.is_empty());
        assert_eq!(player.health, 30);
    }

    #[test]
    fn test_draw_cards_stops_early() {
        let mut player = Player::new("Bob", Faction::Bellato, STARTING_HEALTH);
        player.deck.add(scout());
        player.deck.add(scout());

        let drawn = player.draw_cards(5);
        assert_eq!(drawn.len(), 2);
        assert_eq!(player.hand.len(), 2);
        assert!(player.deck.is_empty());
    }

    #[test]
    fn test_play_creature_requires_energy() {
        let mut player = Player::new("Carol", Faction::Bellato, STARTING_HEALTH);
        let card = scout();
        let id = card.id;
        player.hand.add(card);

        player.energy = 1;
        assert!(!player.play_creature_card(id));
        assert!(player.hand.contains(id));
        assert_eq!(player.energy, 1);

        player.energy = 3;
        assert!(player.play_creature_card(id));
        assert_eq!(player.energy, 1);
        assert!(player.field.contains(id));
        assert_eq!(
            player.field.get(id).unwrap().creature().unwrap().state,
            CreatureState::Asleep
        );
    }

    #[test]
    fn test_play_creature_rejects_wrong_kind() {
        let mut player = Player::new("Carol", Faction::Cora, STARTING_HEALTH);
        let spell = Card::new_spell(
            "Dark Blast",
            Faction::Cora,
            4,
            SpellSubtype::Attack,
            TargetMode::SingleTarget,
            5,
        );
        let id = spell.id;
        player.hand.add(spell);
        player.energy = 10;

        assert!(!player.play_creature_card(id));
        assert!(player.play_artifact_card(id).is_none());
        assert_eq!(player.energy, 10);

        let played = player.play_spell_card(id).unwrap();
        assert_eq!(played.id, id);
        assert_eq!(player.energy, 6);
        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_one_shot_artifact_never_enters_zone() {
        let mut player = Player::new("Dan", Faction::Accretia, STARTING_HEALTH);
        let node = Card::new_artifact("Energy Node", Faction::Neutral, 3, 0);
        let id = node.id;
        player.hand.add(node);
        player.energy = 3;

        match player.play_artifact_card(id) {
            Some(ArtifactPlay::OneShot(card)) => assert!(card.artifact().unwrap().active),
            other => panic!("expected one-shot play, got {other:?}"),
        }
        assert!(player.artifacts.is_empty());
        assert_eq!(player.energy, 0);
    }

    #[test]
    fn test_lasting_artifact_stays_active() {
        let mut player = Player::new("Dan", Faction::Accretia, STARTING_HEALTH);
        let beacon = Card::new_artifact("Beacon", Faction::Neutral, 1, 3);
        let id = beacon.id;
        player.hand.add(beacon);
        player.energy = 1;

        assert_eq!(player.play_artifact_card(id), Some(ArtifactPlay::Persistent(id)));
        assert!(player.artifacts.get(id).unwrap().artifact().unwrap().active);
    }

    #[test]
    fn test_reset_and_cleanup() {
        let mut player = Player::new("Eve", Faction::Bellato, STARTING_HEALTH);
        let healthy = scout();
        let mut dying = scout();
        dying.creature_mut().unwrap().take_damage(2);
        let (healthy_id, dying_id) = (healthy.id, dying.id);
        player.field.add(healthy);
        player.field.add(dying);

        player.reset_creature_states();
        assert_eq!(
            player.field.get(healthy_id).unwrap().creature().unwrap().state,
            CreatureState::Active
        );
        assert_eq!(
            player.field.get(dying_id).unwrap().creature().unwrap().state,
            CreatureState::Asleep
        );
        assert_eq!(player.alive_creature_count(), 1);
        assert_eq!(player.total_attack(), 2);

        let removed = player.cleanup_dead_creatures();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, dying_id);
        assert_eq!(player.field.len(), 1);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut player = Player::new("Fay", Faction::Cora, 5);
        player.take_damage(8);
        assert_eq!(player.health, 0);
        assert!(player.has_lost());
    }
}
