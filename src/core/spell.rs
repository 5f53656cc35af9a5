//! Spell cards

use crate::core::card::{base_info, pay_and_resolve};
use crate::core::{CardIdentity, CardInfo, CardKind, GameState, Playable, PlayResult, Rarity};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Targets a spell resolves against when played without explicit targets
pub const DEFAULT_SPELL_TARGETS: [&str; 2] = ["Dragon", "Goblin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Damage,
    Heal,
    Buff,
    Debuff,
}

impl EffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Damage => "damage",
            EffectType::Heal => "heal",
            EffectType::Buff => "buff",
            EffectType::Debuff => "debuff",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a spell resolved against its targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellResolution {
    pub effect: String,
    pub targets: SmallVec<[String; 4]>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    pub identity: CardIdentity,
    pub effect_type: EffectType,
}

impl SpellCard {
    pub fn new(name: &str, cost: u32, rarity: Rarity, effect_type: EffectType) -> Self {
        SpellCard {
            identity: CardIdentity::new(name, cost, rarity),
            effect_type,
        }
    }

    pub fn resolve_effect(&self, targets: &[&str]) -> SpellResolution {
        let name = &self.identity.name;
        let (effect, description) = match self.effect_type {
            EffectType::Damage => ("Deal damage to target", format!("{name} deals 3 damage to target")),
            EffectType::Heal => ("Heal target", format!("{name} restores 5 health to target")),
            EffectType::Buff => ("Buff target", format!("{name} increases the stats of target")),
            EffectType::Debuff => ("Debuff target", format!("{name} decreases the stats of target")),
        };

        SpellResolution {
            effect: effect.to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
            description,
        }
    }

    /// Play the spell against a caller-supplied target list
    pub fn play_against(&self, state: &mut GameState, targets: &[&str]) -> PlayResult {
        pay_and_resolve(&self.identity, state, || {
            self.resolve_effect(targets).description
        })
    }
}

impl Playable for SpellCard {
    fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    fn kind(&self) -> CardKind {
        CardKind::Spell
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        self.play_against(state, &DEFAULT_SPELL_TARGETS)
    }

    fn card_info(&self) -> CardInfo {
        base_info(
            &self.identity,
            CardKind::Spell,
            [("effect_type", self.effect_type.to_string())],
        )
    }
}
