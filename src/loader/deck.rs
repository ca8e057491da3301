//! Deck statistics

use crate::core::{Card, CardType, Faction};
use std::collections::BTreeMap;
use std::fmt;

/// Summary of a card collection: counts by faction and kind, average cost
#[derive(Debug, Clone, PartialEq)]
pub struct DeckStats {
    pub total: usize,
    pub by_faction: Vec<(Faction, usize)>,
    pub by_type: Vec<(CardType, usize)>,
    pub average_cost: f64,
}

impl DeckStats {
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut total = 0;
        let mut cost_sum = 0i64;
        // Keyed by declaration index so output order is stable
        let mut factions: BTreeMap<usize, (Faction, usize)> = BTreeMap::new();
        let mut types: BTreeMap<usize, (CardType, usize)> = BTreeMap::new();

        for card in cards {
            total += 1;
            cost_sum += i64::from(card.cost);
            factions.entry(card.faction as usize).or_insert((card.faction, 0)).1 += 1;
            let card_type = card.card_type();
            types.entry(card_type as usize).or_insert((card_type, 0)).1 += 1;
        }

        let average_cost = if total == 0 {
            0.0
        } else {
            cost_sum as f64 / total as f64
        };

        DeckStats {
            total,
            by_faction: factions.into_values().collect(),
            by_type: types.into_values().collect(),
            average_cost,
        }
    }

    pub fn count_of_type(&self, card_type: CardType) -> usize {
        self.by_type
            .iter()
            .find(|(t, _)| *t == card_type)
            .map_or(0, |(_, n)| *n)
    }
}

impl fmt::Display for DeckStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cards: {}", self.total)?;
        for (faction, count) in &self.by_faction {
            writeln!(f, "{faction}: {count} cards")?;
        }
        for (card_type, count) in &self.by_type {
            writeln!(f, "{card_type}: {count} cards")?;
        }
        write!(f, "Average cost: {:.1}", self.average_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Catalog;

    #[test]
    fn test_stats_for_cora_deck() {
        let deck = Catalog::standard().standard_deck(Faction::Cora);
        let stats = DeckStats::from_cards(&deck);

        // 5 creatures, 2 spells, 1 relic doubled; 2 neutral artifacts once
        assert_eq!(stats.total, 18);
        assert_eq!(stats.by_faction, vec![(Faction::Cora, 16), (Faction::Neutral, 2)]);
        assert_eq!(stats.count_of_type(CardType::Creature), 10);
        assert_eq!(stats.count_of_type(CardType::Spell), 4);
        assert_eq!(stats.count_of_type(CardType::Artifact), 4);
    }

    #[test]
    fn test_empty_stats() {
        let stats = DeckStats::from_cards(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_cost, 0.0);
        assert!(stats.to_string().contains("Average cost: 0.0"));
    }
}
