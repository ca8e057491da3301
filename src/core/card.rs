//! Card types and definitions

use crate::core::{CardId, CardName, CardType, CreatureState, Faction, SpellSubtype, TargetMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutable battlefield state of a creature
///
/// Current health is kept at or below max health by every mutator. There is
/// no floor: damage may drive current health below zero, and the creature is
/// dead from the moment it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub attack: i32,
    max_health: i32,
    current_health: i32,
    pub state: CreatureState,
}

impl CreatureStats {
    pub fn new(attack: i32, max_health: i32) -> Self {
        CreatureStats {
            attack,
            max_health,
            current_health: max_health,
            state: CreatureState::Asleep,
        }
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    /// Set max health; current health is pulled down if it would exceed it
    pub fn set_max_health(&mut self, max_health: i32) {
        self.max_health = max_health;
        self.current_health = self.current_health.min(max_health);
    }

    /// Set current health, clamped to max health
    pub fn set_current_health(&mut self, health: i32) {
        self.current_health = health.min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Negative amounts are ignored
    pub fn take_damage(&mut self, damage: i32) {
        if damage < 0 {
            return;
        }
        self.current_health = self.current_health.saturating_sub(damage);
    }

    /// Negative amounts are ignored
    pub fn heal(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.current_health = self.current_health.saturating_add(amount).min(self.max_health);
    }

    pub fn buff_attack(&mut self, amount: i32) {
        self.attack = self.attack.saturating_add(amount);
    }

    /// Alive and awake
    pub fn can_attack(&self) -> bool {
        self.is_alive() && self.state == CreatureState::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellStats {
    pub subtype: SpellSubtype,
    pub target: TargetMode,
    pub power: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactStats {
    /// 0 = one-shot, >0 = turns active
    pub duration: u32,
    pub active: bool,
}

impl ArtifactStats {
    pub fn new(duration: u32) -> Self {
        ArtifactStats {
            duration,
            active: false,
        }
    }

    pub fn is_one_shot(&self) -> bool {
        self.duration == 0
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Kind-specific card data. A card's kind never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Creature(CreatureStats),
    Spell(SpellStats),
    Artifact(ArtifactStats),
}

/// Represents a card instance
///
/// Many instances can share a name (the catalog key); each carries its own
/// [`CardId`] and its own mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this card instance
    pub id: CardId,

    /// Card name, also the catalog key
    pub name: CardName,

    pub faction: Faction,

    /// Energy cost
    pub cost: i32,

    /// Rules text
    pub effect_text: String,

    /// Flavor text
    pub lore: String,

    pub image_path: String,

    kind: CardKind,
}

impl Card {
    pub fn new(name: impl Into<CardName>, faction: Faction, cost: i32, kind: CardKind) -> Self {
        let name = name.into();
        let image_path = default_image_path(name.as_str(), faction, kind_type(&kind));
        Card {
            id: CardId::fresh(),
            name,
            faction,
            cost,
            effect_text: String::new(),
            lore: String::new(),
            image_path,
            kind,
        }
    }

    pub fn new_creature(
        name: impl Into<CardName>,
        faction: Faction,
        cost: i32,
        attack: i32,
        health: i32,
    ) -> Self {
        Card::new(name, faction, cost, CardKind::Creature(CreatureStats::new(attack, health)))
    }

    pub fn new_spell(
        name: impl Into<CardName>,
        faction: Faction,
        cost: i32,
        subtype: SpellSubtype,
        target: TargetMode,
        power: i32,
    ) -> Self {
        Card::new(
            name,
            faction,
            cost,
            CardKind::Spell(SpellStats {
                subtype,
                target,
                power,
            }),
        )
    }

    pub fn new_artifact(
        name: impl Into<CardName>,
        faction: Faction,
        cost: i32,
        duration: u32,
    ) -> Self {
        Card::new(name, faction, cost, CardKind::Artifact(ArtifactStats::new(duration)))
    }

    pub fn with_text(mut self, effect_text: impl Into<String>) -> Self {
        self.effect_text = effect_text.into();
        self
    }

    pub fn with_lore(mut self, lore: impl Into<String>) -> Self {
        self.lore = lore.into();
        self
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Independent copy of this card with its own identity
    pub fn fresh_copy(&self) -> Self {
        Card {
            id: CardId::fresh(),
            ..self.clone()
        }
    }

    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    pub fn card_type(&self) -> CardType {
        kind_type(&self.kind)
    }

    pub fn is_creature(&self) -> bool {
        matches!(self.kind, CardKind::Creature(_))
    }

    pub fn creature(&self) -> Option<&CreatureStats> {
        match &self.kind {
            CardKind::Creature(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn creature_mut(&mut self) -> Option<&mut CreatureStats> {
        match &mut self.kind {
            CardKind::Creature(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn spell(&self) -> Option<&SpellStats> {
        match &self.kind {
            CardKind::Spell(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn artifact(&self) -> Option<&ArtifactStats> {
        match &self.kind {
            CardKind::Artifact(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn artifact_mut(&mut self) -> Option<&mut ArtifactStats> {
        match &mut self.kind {
            CardKind::Artifact(stats) => Some(stats),
            _ => None,
        }
    }

    /// Alive creature. Non-creatures are never alive.
    pub fn is_alive_creature(&self) -> bool {
        self.creature().is_some_and(CreatureStats::is_alive)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.faction,
            self.name,
            self.cost,
            self.card_type()
        )?;
        match &self.kind {
            CardKind::Creature(c) => write!(
                f,
                " - {}/{}({}) [{}]",
                c.attack, c.current_health, c.max_health, c.state
            ),
            CardKind::Spell(s) => write!(f, " - {} ({}) -> {}", s.subtype, s.power, s.target),
            CardKind::Artifact(a) => {
                let duration = if a.duration == 0 {
                    "∞".to_string()
                } else {
                    a.duration.to_string()
                };
                write!(f, " - Active: {}, Duration: {}", a.active, duration)
            }
        }
    }
}

fn kind_type(kind: &CardKind) -> CardType {
    match kind {
        CardKind::Creature(_) => CardType::Creature,
        CardKind::Spell(_) => CardType::Spell,
        CardKind::Artifact(_) => CardType::Artifact,
    }
}

/// `Images/Cards/<Kind folder>/<Faction>/<prefix><clean name>.jpg`
pub fn default_image_path(name: &str, faction: Faction, card_type: CardType) -> String {
    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, ':' | '"' | '«' | '»'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let (folder, prefix) = match card_type {
        CardType::Creature => ("Creatures", ""),
        CardType::Spell => ("Spells", "spell_"),
        CardType::Artifact => ("Artifacts", "artifact_"),
    };

    format!("Images/Cards/{folder}/{faction}/{prefix}{clean}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new_creature("Steel Vanguard", Faction::Accretia, 4, 2, 6);

        assert_eq!(card.name.as_str(), "Steel Vanguard");
        assert_eq!(card.card_type(), CardType::Creature);
        let stats = card.creature().unwrap();
        assert_eq!(stats.attack, 2);
        assert_eq!(stats.current_health(), 6);
        assert_eq!(stats.max_health(), 6);
        assert_eq!(stats.state, CreatureState::Asleep);
        assert!(card.spell().is_none());
    }

    #[test]
    fn test_damage_and_death() {
        let mut stats = CreatureStats::new(3, 3);
        stats.take_damage(2);
        assert_eq!(stats.current_health(), 1);
        assert!(stats.is_alive());

        stats.take_damage(4);
        assert_eq!(stats.current_health(), -3);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_negative_amounts_ignored() {
        let mut stats = CreatureStats::new(1, 5);
        stats.take_damage(2);
        stats.take_damage(-10);
        assert_eq!(stats.current_health(), 3);
        stats.heal(-10);
        assert_eq!(stats.current_health(), 3);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let mut stats = CreatureStats::new(i32::MAX, 5);
        stats.buff_attack(10);
        assert_eq!(stats.attack, i32::MAX);

        stats.set_current_health(i32::MIN + 1);
        stats.take_damage(i32::MAX);
        assert_eq!(stats.current_health(), i32::MIN);
        stats.heal(i32::MAX);
        assert_eq!(stats.current_health(), -1);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut stats = CreatureStats::new(1, 10);
        stats.take_damage(7);
        stats.heal(4);
        assert_eq!(stats.current_health(), 7);
        stats.heal(100);
        assert_eq!(stats.current_health(), 10);
    }

    #[test]
    fn test_set_health_clamps() {
        let mut stats = CreatureStats::new(1, 4);
        stats.set_current_health(9);
        assert_eq!(stats.current_health(), 4);

        stats.set_max_health(2);
        assert_eq!(stats.current_health(), 2);

        stats.set_max_health(6);
        stats.set_current_health(5);
        assert_eq!(stats.current_health(), 5);
    }

    #[test]
    fn test_fresh_copy_is_independent() {
        let original = Card::new_creature("Cora Novice", Faction::Cora, 2, 1, 3);
        let mut copy = original.fresh_copy();

        assert_ne!(original.id, copy.id);
        copy.creature_mut().unwrap().take_damage(2);
        assert_eq!(original.creature().unwrap().current_health(), 3);
        assert_eq!(copy.creature().unwrap().current_health(), 1);
    }

    #[test]
    fn test_display() {
        let creature = Card::new_creature("Bellato Scout", Faction::Bellato, 2, 2, 2);
        assert_eq!(
            creature.to_string(),
            "[Bellato] Bellato Scout (2) - Creature - 2/2(2) [Asleep]"
        );

        let spell = Card::new_spell(
            "Dark Blast",
            Faction::Cora,
            4,
            SpellSubtype::Attack,
            TargetMode::SingleTarget,
            5,
        );
        assert_eq!(
            spell.to_string(),
            "[Cora] Dark Blast (4) - Spell - Attack (5) -> SingleTarget"
        );

        let artifact = Card::new_artifact("Energy Node", Faction::Neutral, 3, 0);
        assert_eq!(
            artifact.to_string(),
            "[Neutral] Energy Node (3) - Artifact - Active: false, Duration: ∞"
        );
    }

    #[test]
    fn test_default_image_path() {
        assert_eq!(
            default_image_path("MAU Pilot", Faction::Bellato, CardType::Creature),
            "Images/Cards/Creatures/Bellato/MAU_Pilot.jpg"
        );
        assert_eq!(
            default_image_path("Dark Blast", Faction::Cora, CardType::Spell),
            "Images/Cards/Spells/Cora/spell_Dark_Blast.jpg"
        );
        assert_eq!(
            default_image_path("Protocol: \"Overload\"", Faction::Accretia, CardType::Spell),
            "Images/Cards/Spells/Accretia/spell_Protocol_Overload.jpg"
        );
    }
}
