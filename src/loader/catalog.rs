//! Card catalog for looking up card templates
//!
//! Name-keyed registry of immutable templates. Every lookup returns a fresh
//! instance; the catalog itself is never mutated after construction.

use crate::core::{Card, CardType, Faction};
use crate::loader::templates::{CardTemplate, CARD_TEMPLATES};
use crate::{CcgError, Result};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

pub const STANDARD_DECK_SIZE: usize = 30;

/// Registry of card templates in definition order
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<CardTemplate>,
    /// Lowercased name -> index into `templates`
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog; names must be unique ignoring case
    pub fn from_templates(templates: impl IntoIterator<Item = CardTemplate>) -> Result<Self> {
        let templates: Vec<CardTemplate> = templates.into_iter().collect();
        let mut index = FxHashMap::default();

        for (i, template) in templates.iter().enumerate() {
            if index.insert(template.name.to_lowercase(), i).is_some() {
                return Err(CcgError::DuplicateCard(template.name.to_string()));
            }
        }

        Ok(Catalog { templates, index })
    }

    /// The built-in catalog, shared across the process
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut index = FxHashMap::default();
            for (i, template) in CARD_TEMPLATES.iter().enumerate() {
                index.insert(template.name.to_lowercase(), i);
            }
            Catalog {
                templates: CARD_TEMPLATES.to_vec(),
                index,
            }
        })
    }

    /// Look up a template by name (case-insensitive)
    pub fn template(&self, name: &str) -> Option<&CardTemplate> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.templates[i])
    }

    /// Construct a fresh card by name (case-insensitive)
    pub fn create(&self, name: &str) -> Result<Card> {
        self.template(name)
            .map(CardTemplate::instantiate)
            .ok_or_else(|| CcgError::CardNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    pub fn templates(&self) -> &[CardTemplate] {
        &self.templates
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().map(|t| t.name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn all_cards(&self) -> Vec<Card> {
        self.templates.iter().map(CardTemplate::instantiate).collect()
    }

    pub fn by_faction(&self, faction: Faction) -> Vec<Card> {
        self.instantiate_where(|t| t.faction == faction)
    }

    pub fn by_type(&self, card_type: CardType) -> Vec<Card> {
        self.instantiate_where(|t| t.card_type() == card_type)
    }

    pub fn filter_by_cost(&self, max_cost: i32) -> Vec<Card> {
        self.instantiate_where(|t| t.cost <= max_cost)
    }

    fn instantiate_where(&self, pred: impl Fn(&CardTemplate) -> bool) -> Vec<Card> {
        self.templates
            .iter()
            .filter(|t| pred(t))
            .map(CardTemplate::instantiate)
            .collect()
    }

    /// Two copies of every `faction` card, then one of every Neutral card,
    /// truncated to the first 30 in definition order
    pub fn standard_deck(&self, faction: Faction) -> Vec<Card> {
        let faction_cards = self
            .templates
            .iter()
            .filter(|t| t.faction == faction)
            .flat_map(|t| [t, t]);
        let neutral_cards = self.templates.iter().filter(|t| t.faction == Faction::Neutral);

        faction_cards
            .chain(neutral_cards)
            .take(STANDARD_DECK_SIZE)
            .map(CardTemplate::instantiate)
            .collect()
    }
}
