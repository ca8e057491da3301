//! Game zones (Deck, Hand, Field, Artifacts, Graveyard)

use crate::core::{Card, CardId, CardName};
use serde::{Deserialize, Serialize};

/// Different zones where cards can exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Field,
    Artifacts,
    Graveyard,
}

/// A zone owning the cards in it
///
/// Order is kept for every zone. It matters for Deck (draw from the front)
/// and Field, and keeping it for the bag-like zones makes iteration
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardZone {
    pub zone_type: Zone,
    cards: Vec<Card>,
}

impl CardZone {
    pub fn new(zone_type: Zone) -> Self {
        CardZone {
            zone_type,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(zone_type: Zone, cards: Vec<Card>) -> Self {
        CardZone { zone_type, cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove(&mut self, card_id: CardId) -> Option<Card> {
        // remove() rather than swap_remove() keeps the remaining order stable
        let pos = self.position(card_id)?;
        Some(self.cards.remove(pos))
    }

    pub fn position(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.position(card_id).is_some()
    }

    pub fn get(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn get_mut(&mut self, card_id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    /// First card whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name.matches(name))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw from the front (for Deck)
    pub fn draw_front(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Look at the front card without removing it
    pub fn peek_front(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Uniform in-place permutation (for Deck)
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Remove and return every card matching the predicate, keeping order
    pub fn extract_if(&mut self, mut pred: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.cards).into_iter().partition(|c| pred(c));
        self.cards = kept;
        taken
    }

    pub fn names(&self) -> Vec<CardName> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl<'a> IntoIterator for &'a CardZone {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
