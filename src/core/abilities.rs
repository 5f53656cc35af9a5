//! Capability traits layered on top of [`Playable`]
//!
//! A card type implements only the capabilities it actually has:
//! creatures fight, elite cards fight and cast, tournament cards fight and
//! carry a rating.

use crate::core::{CardName, Playable};
use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rating gained per match won
pub const WIN_BONUS: i64 = 10;

/// Rating lost per match lost
pub const LOSS_PENALTY: i64 = 5;

/// Combat numbers carried by elite and tournament cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatProfile {
    pub damage: i32,
    pub defense: i32,
    pub health: i32,
    /// Free-form tag, e.g. "melee" or "Fire"
    pub combat_type: String,
}

impl CombatProfile {
    pub fn new(damage: i32, defense: i32, health: i32, combat_type: &str) -> Self {
        CombatProfile {
            damage,
            defense,
            health,
            combat_type: combat_type.to_string(),
        }
    }

    pub fn validate(&self, owner: &CardName) -> Result<()> {
        if self.damage <= 0 || self.health <= 0 {
            return Err(DeckError::InvalidAttributes(format!(
                "{owner}: damage and health must be positive (got {}/{})",
                self.damage, self.health
            )));
        }
        if self.defense < 0 {
            return Err(DeckError::InvalidAttributes(format!(
                "{owner}: defense must not be negative (got {})",
                self.defense
            )));
        }
        Ok(())
    }

    pub(crate) fn attributes(&self) -> [(&'static str, String); 4] {
        [
            ("damage", self.damage.to_string()),
            ("defense", self.defense.to_string()),
            ("health", self.health.to_string()),
            ("combat_type", self.combat_type.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: CardName,
    pub target: String,
    pub damage_dealt: i32,
    pub combat_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseResult {
    pub defender: CardName,
    pub damage_taken: i32,
    pub damage_blocked: i32,
    pub still_alive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub name: CardName,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub combat_type: Option<String>,
}

/// A card that can fight
pub trait Combatant: Playable {
    fn attack_power(&self) -> i32;

    /// Threshold checked by [`Combatant::defend`]
    fn defense_value(&self) -> i32;

    fn health(&self) -> i32;

    fn combat_type(&self) -> Option<&str> {
        None
    }

    fn attack(&self, target: &str) -> AttackResult {
        AttackResult {
            attacker: self.name().clone(),
            target: target.to_string(),
            damage_dealt: self.attack_power(),
            combat_type: self.combat_type().map(str::to_string),
        }
    }

    /// Defense is an all-or-nothing threshold: the card survives any hit that
    /// does not exceed its defense value, and nothing is subtracted from health.
    fn defend(&self, incoming_damage: i32) -> DefenseResult {
        DefenseResult {
            defender: self.name().clone(),
            damage_taken: incoming_damage,
            damage_blocked: self.defense_value(),
            still_alive: incoming_damage <= self.defense_value(),
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            name: self.name().clone(),
            attack: self.attack_power(),
            defense: self.defense_value(),
            health: self.health(),
            combat_type: self.combat_type().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    pub caster: CardName,
    pub spell: String,
    pub targets: SmallVec<[String; 4]>,
    pub mana_used: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaChannel {
    pub channeled: u32,
    pub total_mana: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicStats {
    pub name: CardName,
    pub mana: u32,
    pub spell_effects: Vec<String>,
}

/// A card with its own mana pool that can cast named spells
pub trait Caster: Playable {
    fn cast_spell(&mut self, spell_name: &str, targets: &[&str]) -> SpellCast;

    fn channel_mana(&mut self, amount: u32) -> ManaChannel;

    fn magic_stats(&self) -> MagicStats;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    pub name: CardName,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
}

/// A card with a tournament rating and a win/loss record
pub trait Ranked: Playable {
    /// Current rating: the initial rating adjusted by [`WIN_BONUS`] per win
    /// and [`LOSS_PENALTY`] per loss
    fn calculate_rating(&self) -> i64;

    fn update_wins(&mut self, wins: u32);

    fn update_losses(&mut self, losses: u32);

    fn wins(&self) -> u32;

    fn losses(&self) -> u32;

    fn rank_info(&self) -> RankInfo {
        RankInfo {
            name: self.name().clone(),
            rating: self.calculate_rating(),
            wins: self.wins(),
            losses: self.losses(),
        }
    }
}
