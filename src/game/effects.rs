//! Spell and artifact effect dispatch
//!
//! Both tables are closed: spells resolve by subtype and target mode,
//! artifacts by name. Anything outside the tables is inert.

use crate::core::{
    Card, CardId, CardName, CreatureStats, Player, SpellStats, SpellSubtype, TargetMode,
};
use crate::game::GameLogger;

/// Resolved meaning of a spell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellEffect {
    DamageTarget(i32),
    HealTarget(i32),
    BuffTarget(i32),
    DamageAllEnemies(i32),
    BuffAllAllies(i32),
    /// Recognised card with no effect (e.g. an `Other` subtype single-target spell)
    Inert,
}

impl SpellEffect {
    pub fn from_stats(stats: &SpellStats) -> Self {
        let power = stats.power;
        match (stats.target, stats.subtype) {
            (TargetMode::SingleTarget, SpellSubtype::Attack) => SpellEffect::DamageTarget(power),
            (TargetMode::SingleTarget, SpellSubtype::Healing) => SpellEffect::HealTarget(power),
            (TargetMode::SingleTarget, SpellSubtype::Buff) => SpellEffect::BuffTarget(power),
            (TargetMode::SingleTarget, SpellSubtype::Other) => SpellEffect::Inert,
            (TargetMode::AllEnemyCreatures, _) => SpellEffect::DamageAllEnemies(power),
            (TargetMode::AllAllyCreatures, _) => SpellEffect::BuffAllAllies(power),
        }
    }

    pub fn needs_target(&self) -> bool {
        matches!(
            self,
            SpellEffect::DamageTarget(_) | SpellEffect::HealTarget(_) | SpellEffect::BuffTarget(_)
        )
    }
}

/// Named artifact effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactEffect {
    /// +1 max energy, not limited by the per-turn cap
    MiningRig,
    /// +2 energy now, clamped to max energy
    EnergyNode,
    /// +1 max health and +1 health to every creature on the caster's field
    SacredRelic,
}

impl ArtifactEffect {
    pub const ENERGY_NODE_GAIN: i32 = 2;

    /// Look up an effect by exact card name or one of its short aliases,
    /// ignoring case
    pub fn for_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "mining rig" | "mining" => Some(ArtifactEffect::MiningRig),
            "energy node" | "energy" => Some(ArtifactEffect::EnergyNode),
            "sacred relic of cora" | "sacred relic" | "relic of cora" => {
                Some(ArtifactEffect::SacredRelic)
            }
            _ => None,
        }
    }
}

/// Find a creature card on either field
pub(crate) fn target_creature_mut<'a>(
    caster: &'a mut Player,
    opponent: &'a mut Player,
    target: CardId,
) -> Option<&'a mut Card> {
    let card = match caster.field.get_mut(target) {
        Some(card) => card,
        None => opponent.field.get_mut(target)?,
    };
    card.is_creature().then_some(card)
}

/// Run `apply` on a creature card's stats; returns the card's name
fn on_creature(card: &mut Card, apply: impl FnOnce(&mut CreatureStats)) -> Option<CardName> {
    apply(card.creature_mut()?);
    Some(card.name.clone())
}

fn on_target(
    caster: &mut Player,
    opponent: &mut Player,
    target: Option<CardId>,
    apply: impl FnOnce(&mut CreatureStats),
) -> Option<CardName> {
    let card = target_creature_mut(caster, opponent, target?)?;
    on_creature(card, apply)
}

/// Apply a spell. Single-target effects need a `target` already known to be a
/// living creature on one of the fields.
pub(crate) fn apply_spell(
    effect: SpellEffect,
    caster: &mut Player,
    opponent: &mut Player,
    target: Option<CardId>,
    logger: &mut GameLogger,
) {
    match effect {
        SpellEffect::DamageTarget(power) => {
            let hit = on_target(caster, opponent, target, |stats| stats.take_damage(power));
            if let Some(name) = hit {
                logger.verbose(format!("{name} takes {power} damage"));
            }
        }
        SpellEffect::HealTarget(power) => {
            if let Some(name) = on_target(caster, opponent, target, |stats| stats.heal(power)) {
                logger.verbose(format!("{name} restores {power} health"));
            }
        }
        SpellEffect::BuffTarget(power) => {
            let buffed = on_target(caster, opponent, target, |stats| stats.buff_attack(power));
            if let Some(name) = buffed {
                logger.verbose(format!("{name} gains +{power} attack"));
            }
        }
        SpellEffect::DamageAllEnemies(power) => {
            for card in opponent.field.iter_mut() {
                if let Some(name) = on_creature(card, |stats| stats.take_damage(power)) {
                    logger.verbose(format!("{name} takes {power} damage"));
                }
            }
        }
        SpellEffect::BuffAllAllies(power) => {
            for card in caster.field.iter_mut() {
                if let Some(name) = on_creature(card, |stats| stats.buff_attack(power)) {
                    logger.verbose(format!("{name} gains +{power} attack"));
                }
            }
        }
        SpellEffect::Inert => {}
    }
}

pub(crate) fn apply_artifact(effect: ArtifactEffect, caster: &mut Player, logger: &mut GameLogger) {
    match effect {
        ArtifactEffect::MiningRig => {
            caster.max_energy = caster.max_energy.saturating_add(1);
            logger.normal(format!("{}: +1 max energy from Mining Rig", caster.name));
        }
        ArtifactEffect::EnergyNode => {
            caster.energy = caster
                .energy
                .saturating_add(ArtifactEffect::ENERGY_NODE_GAIN)
                .min(caster.max_energy);
            logger.normal(format!(
                "{}: +{} energy from Energy Node",
                caster.name,
                ArtifactEffect::ENERGY_NODE_GAIN
            ));
        }
        ArtifactEffect::SacredRelic => {
            for stats in caster.field.iter_mut().filter_map(|c| c.creature_mut()) {
                let max = stats.max_health();
                stats.set_max_health(max.saturating_add(1));
                stats.heal(1);
            }
            logger.normal(format!("{}: +1 health to all creatures from Sacred Relic", caster.name));
        }
    }
}
