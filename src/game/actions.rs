//! Player actions and their validation
//!
//! Every action checks all of its preconditions before touching state, so a
//! rejected action leaves the match exactly as it was.

use crate::core::{ArtifactPlay, Card, CardId, CardType, CreatureStats};
use crate::game::combat::{resolve_creature_combat, resolve_direct_attack};
use crate::game::effects::{apply_artifact, apply_spell, ArtifactEffect, SpellEffect};
use crate::game::state::split_seats;
use crate::game::Match;
use thiserror::Error;

/// Why an action was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejected {
    #[error("The game is over")]
    GameOver,

    #[error("Card {0} is not in the current player's hand")]
    NotInHand(CardId),

    #[error("Card {card} is not a {expected}")]
    WrongCardKind { card: CardId, expected: CardType },

    #[error("Not enough energy: need {needed}, have {available}")]
    InsufficientEnergy { needed: i32, available: i32 },

    #[error("Field is full ({capacity} creatures)")]
    FieldFull { capacity: usize },

    #[error("Creature {0} is not on the current player's field")]
    NotOnOwnField(CardId),

    #[error("Creature {0} is not on the opponent's field")]
    NotOnOpponentField(CardId),

    #[error("Creature {0} is dead")]
    CreatureDead(CardId),

    #[error("Creature {0} is not ready to attack")]
    CreatureNotActive(CardId),

    #[error("This spell needs a target creature")]
    TargetRequired,

    #[error("Card {0} is not a creature in play")]
    InvalidTarget(CardId),

    #[error("The opponent still has {0} creature(s) defending")]
    DefendersRemain(usize),
}

/// Types of game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    PlayCreature(CardId),

    PlaySpell { card: CardId, target: Option<CardId> },

    PlayArtifact(CardId),

    Attack { attacker: CardId, defender: CardId },

    AttackPlayer(CardId),

    EndTurn,
}

impl Match {
    /// Dispatch a [`GameAction`] to its action method
    pub fn apply(&mut self, action: GameAction) -> Result<(), ActionRejected> {
        match action {
            GameAction::PlayCreature(card) => self.play_creature_card(card),
            GameAction::PlaySpell { card, target } => self.play_spell_card(card, target),
            GameAction::PlayArtifact(card) => self.play_artifact_card(card),
            GameAction::Attack { attacker, defender } => {
                self.attack_with_creature(attacker, defender)
            }
            GameAction::AttackPlayer(attacker) => self.attack_player_directly(attacker),
            GameAction::EndTurn => {
                self.ensure_running()?;
                self.end_turn();
                Ok(())
            }
        }
    }

    fn ensure_running(&self) -> Result<(), ActionRejected> {
        if self.game_over {
            Err(ActionRejected::GameOver)
        } else {
            Ok(())
        }
    }

    /// A card of `kind` in the current player's hand that they can pay for
    fn playable_from_hand(&self, card_id: CardId, kind: CardType) -> Result<&Card, ActionRejected> {
        let player = self.current_player();
        let card = player
            .hand
            .get(card_id)
            .ok_or(ActionRejected::NotInHand(card_id))?;

        if card.card_type() != kind {
            return Err(ActionRejected::WrongCardKind {
                card: card_id,
                expected: kind,
            });
        }
        if player.energy < card.cost {
            return Err(ActionRejected::InsufficientEnergy {
                needed: card.cost,
                available: player.energy,
            });
        }
        Ok(card)
    }

    /// A living, Active creature on the current player's field
    fn ready_attacker(&self, attacker: CardId) -> Result<&CreatureStats, ActionRejected> {
        let stats = self
            .current_player()
            .field
            .get(attacker)
            .and_then(Card::creature)
            .ok_or(ActionRejected::NotOnOwnField(attacker))?;

        if !stats.is_alive() {
            return Err(ActionRejected::CreatureDead(attacker));
        }
        if !stats.can_attack() {
            return Err(ActionRejected::CreatureNotActive(attacker));
        }
        Ok(stats)
    }

    /// Summon a creature from hand onto the current player's field
    pub fn play_creature_card(&mut self, card_id: CardId) -> Result<(), ActionRejected> {
        self.ensure_running()?;
        let card = self.playable_from_hand(card_id, CardType::Creature)?;
        let (name, cost) = (card.name.clone(), card.cost);

        let capacity = self.config.field_capacity;
        if self.current_player().field.len() >= capacity {
            return Err(ActionRejected::FieldFull { capacity });
        }

        let player = self.player_mut(self.turn.current);
        if !player.play_creature_card(card_id) {
            return Err(ActionRejected::NotInHand(card_id));
        }
        let msg = format!("{} summons {} ({} energy)", player.name, name, cost);
        self.logger.normal(msg);
        Ok(())
    }

    /// Cast a spell from hand
    ///
    /// Single-target spells need `target` to be a living creature on either
    /// field; mass spells ignore it. The spell goes to the graveyard.
    pub fn play_spell_card(
        &mut self,
        card_id: CardId,
        target: Option<CardId>,
    ) -> Result<(), ActionRejected> {
        self.ensure_running()?;
        let card = self.playable_from_hand(card_id, CardType::Spell)?;
        let effect = card
            .spell()
            .map(SpellEffect::from_stats)
            .unwrap_or(SpellEffect::Inert);

        let target = if effect.needs_target() {
            let target = target.ok_or(ActionRejected::TargetRequired)?;
            let stats = self
                .players
                .iter()
                .find_map(|p| p.field.get(target))
                .and_then(Card::creature)
                .ok_or(ActionRejected::InvalidTarget(target))?;
            if !stats.is_alive() {
                return Err(ActionRejected::CreatureDead(target));
            }
            Some(target)
        } else {
            None
        };

        let (caster, opponent) = split_seats(&mut self.players, self.turn.current);
        let spell = caster
            .play_spell_card(card_id)
            .ok_or(ActionRejected::NotInHand(card_id))?;
        self.logger
            .normal(format!("{} casts {} ({} energy)", caster.name, spell.name, spell.cost));

        apply_spell(effect, caster, opponent, target, &mut self.logger);
        self.graveyard.add(spell);
        Ok(())
    }

    /// Activate an artifact from hand
    ///
    /// Known artifact names apply their effect; any other artifact is inert.
    /// One-shot artifacts go straight to the graveyard.
    pub fn play_artifact_card(&mut self, card_id: CardId) -> Result<(), ActionRejected> {
        self.ensure_running()?;
        let card = self.playable_from_hand(card_id, CardType::Artifact)?;
        let (name, cost) = (card.name.clone(), card.cost);

        let caster = &mut self.players[self.turn.current.index()];
        let played = caster
            .play_artifact_card(card_id)
            .ok_or(ActionRejected::NotInHand(card_id))?;
        self.logger
            .normal(format!("{} activates {} ({} energy)", caster.name, name, cost));

        if let Some(effect) = ArtifactEffect::for_name(name.as_str()) {
            apply_artifact(effect, caster, &mut self.logger);
        }
        if let ArtifactPlay::OneShot(card) = played {
            self.graveyard.add(card);
        }
        Ok(())
    }

    /// Creature-versus-creature attack
    pub fn attack_with_creature(
        &mut self,
        attacker: CardId,
        defender: CardId,
    ) -> Result<(), ActionRejected> {
        self.ensure_running()?;
        self.ready_attacker(attacker)?;

        let defender_stats = self
            .opponent_player()
            .field
            .get(defender)
            .and_then(Card::creature)
            .ok_or(ActionRejected::NotOnOpponentField(defender))?;
        if !defender_stats.is_alive() {
            return Err(ActionRejected::CreatureDead(defender));
        }

        let (own, other) = split_seats(&mut self.players, self.turn.current);
        let (Some(attacking), Some(defending)) =
            (own.field.get_mut(attacker), other.field.get_mut(defender))
        else {
            return Err(ActionRejected::NotOnOwnField(attacker));
        };
        let (Some(a_stats), Some(d_stats)) =
            (attacking.creature_mut(), defending.creature_mut())
        else {
            return Err(ActionRejected::InvalidTarget(defender));
        };

        let outcome = resolve_creature_combat(a_stats, d_stats);
        let (a_health, a_max) = (a_stats.current_health(), a_stats.max_health());
        let (d_health, d_max) = (d_stats.current_health(), d_stats.max_health());

        self.logger
            .normal(format!("{} attacks {}!", attacking.name, defending.name));
        self.logger.verbose(format!(
            "{} takes {} damage. Health: {}/{}",
            defending.name, outcome.damage_dealt, d_health, d_max
        ));
        if let Some(damage) = outcome.retaliation {
            self.logger.verbose(format!(
                "{} takes {} damage in return. Health: {}/{}",
                attacking.name, damage, a_health, a_max
            ));
        }
        if outcome.defender_died {
            self.logger.normal(format!("{} is destroyed", defending.name));
        }
        Ok(())
    }

    /// Attack the opposing player; only legal once their field has no
    /// living creatures
    pub fn attack_player_directly(&mut self, attacker: CardId) -> Result<(), ActionRejected> {
        self.ensure_running()?;
        self.ready_attacker(attacker)?;

        let defenders = self.opponent_player().alive_creature_count();
        if defenders > 0 {
            return Err(ActionRejected::DefendersRemain(defenders));
        }

        let current = self.turn.current;
        let (own, other) = split_seats(&mut self.players, current);
        let Some(attacking) = own.field.get_mut(attacker) else {
            return Err(ActionRejected::NotOnOwnField(attacker));
        };
        let name = attacking.name.clone();
        let Some(stats) = attacking.creature_mut() else {
            return Err(ActionRejected::NotOnOwnField(attacker));
        };

        let damage = resolve_direct_attack(stats, other);
        self.logger
            .normal(format!("{} attacks {} directly!", name, other.name));
        self.logger.normal(format!(
            "{} takes {} damage. Health: {}",
            other.name, damage, other.health
        ));

        if other.has_lost() {
            self.end_game(current);
        }
        Ok(())
    }
}
