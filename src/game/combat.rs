//! Combat math
//!
//! Validation happens in the action layer; these functions assume a legal
//! attack and only apply damage and state changes.

use crate::core::{CreatureState, CreatureStats, Player};

/// What happened in a creature-versus-creature fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Damage the defender took
    pub damage_dealt: i32,
    /// Damage the attacker took back, if the defender survived
    pub retaliation: Option<i32>,
    pub defender_died: bool,
}

/// Attacker strikes first; a surviving defender strikes back
pub fn resolve_creature_combat(
    attacker: &mut CreatureStats,
    defender: &mut CreatureStats,
) -> CombatOutcome {
    let damage_dealt = attacker.attack;
    defender.take_damage(damage_dealt);

    let retaliation = if defender.is_alive() {
        attacker.take_damage(defender.attack);
        Some(defender.attack)
    } else {
        None
    };

    attacker.state = CreatureState::Exhausted;

    CombatOutcome {
        damage_dealt,
        retaliation,
        defender_died: !defender.is_alive(),
    }
}

/// Attacker hits the opposing player; returns the damage dealt
pub fn resolve_direct_attack(attacker: &mut CreatureStats, opponent: &mut Player) -> i32 {
    let damage = attacker.attack;
    opponent.take_damage(damage);
    attacker.state = CreatureState::Exhausted;
    damage
}
