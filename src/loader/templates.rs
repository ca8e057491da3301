//! Built-in card definitions
//!
//! The table order is the catalog definition order, which fixes the
//! pre-shuffle contents of every standard deck.

use crate::core::{
    ArtifactStats, Card, CardKind, CardType, CreatureStats, Faction, SpellStats, SpellSubtype,
    TargetMode,
};

/// Kind-specific template data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Creature { attack: i32, health: i32 },
    Spell { subtype: SpellSubtype, target: TargetMode, power: i32 },
    Artifact { duration: u32 },
}

/// Immutable definition a card instance is stamped from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: &'static str,
    pub faction: Faction,
    pub cost: i32,
    pub effect_text: &'static str,
    pub lore: &'static str,
    pub kind: TemplateKind,
}

impl CardTemplate {
    pub const fn creature(
        name: &'static str,
        faction: Faction,
        cost: i32,
        attack: i32,
        health: i32,
    ) -> Self {
        CardTemplate {
            name,
            faction,
            cost,
            effect_text: "Basic creature",
            lore: "",
            kind: TemplateKind::Creature { attack, health },
        }
    }

    pub const fn spell(
        name: &'static str,
        faction: Faction,
        cost: i32,
        subtype: SpellSubtype,
        target: TargetMode,
        power: i32,
    ) -> Self {
        CardTemplate {
            name,
            faction,
            cost,
            effect_text: "",
            lore: "",
            kind: TemplateKind::Spell { subtype, target, power },
        }
    }

    pub const fn artifact(name: &'static str, faction: Faction, cost: i32, duration: u32) -> Self {
        CardTemplate {
            name,
            faction,
            cost,
            effect_text: "",
            lore: "",
            kind: TemplateKind::Artifact { duration },
        }
    }

    pub const fn text(mut self, effect_text: &'static str) -> Self {
        self.effect_text = effect_text;
        self
    }

    pub const fn lore(mut self, lore: &'static str) -> Self {
        self.lore = lore;
        self
    }

    pub fn card_type(&self) -> CardType {
        match self.kind {
            TemplateKind::Creature { .. } => CardType::Creature,
            TemplateKind::Spell { .. } => CardType::Spell,
            TemplateKind::Artifact { .. } => CardType::Artifact,
        }
    }

    /// Build a fresh, independent card instance
    pub fn instantiate(&self) -> Card {
        let kind = match self.kind {
            TemplateKind::Creature { attack, health } => {
                CardKind::Creature(CreatureStats::new(attack, health))
            }
            TemplateKind::Spell { subtype, target, power } => CardKind::Spell(SpellStats {
                subtype,
                target,
                power,
            }),
            TemplateKind::Artifact { duration } => CardKind::Artifact(ArtifactStats::new(duration)),
        };

        Card::new(self.name, self.faction, self.cost, kind)
            .with_text(self.effect_text)
            .with_lore(self.lore)
    }
}

use Faction::{Accretia, Bellato, Cora, Neutral};
use SpellSubtype::{Attack, Buff, Healing};
use TargetMode::{AllAllyCreatures, AllEnemyCreatures, SingleTarget};

pub static CARD_TEMPLATES: &[CardTemplate] = &[
    // Accretia Empire
    CardTemplate::creature("Accretia Assault Unit", Accretia, 2, 3, 2)
        .lore("Steel knows no fear."),
    CardTemplate::creature("Suppression Combat Cyborg", Accretia, 3, 4, 3)
        .lore("Man is weak. The machine is efficient."),
    CardTemplate::creature("Siege Cyborg", Accretia, 5, 6, 4)
        .lore("Built to destroy."),
    CardTemplate::creature("Steel Vanguard", Accretia, 4, 2, 6)
        .lore("While it stands, the Empire will not fall."),
    CardTemplate::creature("Command Cyber-Officer", Accretia, 6, 5, 5)
        .lore("The order is absolute."),
    // Bellato Union
    CardTemplate::creature("Bellato Scout", Bellato, 2, 2, 2)
        .lore("Information is half the victory."),
    CardTemplate::creature("Bellato Ranger", Bellato, 3, 3, 2)
        .lore("Precision matters more than strength."),
    CardTemplate::creature("Tactical Engineer", Bellato, 3, 2, 4)
        .lore("Every bolt counts."),
    CardTemplate::creature("MAU Pilot", Bellato, 5, 4, 4)
        .lore("The MAU is the symbol of technological superiority."),
    CardTemplate::creature("Tactical Group Commander", Bellato, 6, 5, 5)
        .lore("Victory is the right calculation."),
    // Holy Alliance Cora
    CardTemplate::creature("Cora Novice", Cora, 2, 1, 3)
        .lore("Every path begins with faith."),
    CardTemplate::creature("Cora Priest", Cora, 3, 1, 4)
        .lore("The Animus hears the call of the living."),
    CardTemplate::creature("Cora Guardian", Cora, 4, 3, 5)
        .lore("Its strength grows with every prayer."),
    CardTemplate::creature("Summoned Animus", Cora, 6, 4, 4)
        .lore("It returns to the flow of energy."),
    CardTemplate::creature("Cora High Mage", Cora, 7, 5, 6)
        .lore("The will of the Animus made flesh."),
    // Spells
    CardTemplate::spell("Dark Blast", Cora, 4, Attack, SingleTarget, 5)
        .text("Deals 5 damage to the chosen creature.")
        .lore("Darkness devours the weak."),
    CardTemplate::spell("Holy Restoration", Cora, 3, Healing, SingleTarget, 4)
        .text("Restores 4 health to the target.")
        .lore("The power of the Animus heals wounds."),
    CardTemplate::spell("Overload Protocol", Accretia, 2, Buff, SingleTarget, 4)
        .text("Gives a creature +4 attack.")
        .lore("Maximum performance."),
    CardTemplate::spell("Orbital Strike", Bellato, 5, Attack, AllEnemyCreatures, 3)
        .text("Deals 3 damage to every enemy creature.")
        .lore("Orbital strike authorized."),
    CardTemplate::spell("Tactical Analysis", Bellato, 3, Buff, AllAllyCreatures, 1)
        .text("All your creatures get +1 attack.")
        .lore("Whoever controls the battlefield wins."),
    // Artifacts
    CardTemplate::artifact("Mining Rig", Neutral, 4, 0)
        .text("Gives +1 maximum energy.")
        .lore("Resources decide the outcome of any war."),
    CardTemplate::artifact("Energy Node", Neutral, 3, 0)
        .text("Gives +2 energy.")
        .lore("A steady flow of energy is the key to superiority."),
    CardTemplate::artifact("Sacred Relic of Cora", Cora, 4, 0)
        .text("Gives +1 health to all your creatures.")
        .lore("The relic holds echoes of the ancient power of the Animus."),
];
