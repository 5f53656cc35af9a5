//! Elite cards: combatants with their own mana pool

use crate::core::card::{base_info, pay_and_resolve};
use crate::core::{
    Caster, CardIdentity, CardInfo, CardKind, CombatProfile, Combatant, GameState, MagicStats,
    ManaChannel, Playable, PlayResult, Rarity, SpellCast,
};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteCard {
    pub identity: CardIdentity,
    pub combat: CombatProfile,
    /// Names of spells cast so far, oldest first
    pub spell_effects: Vec<String>,
    /// Mana channeled into the card's own pool
    pub total_mana: u32,
}

impl EliteCard {
    pub fn new(name: &str, cost: u32, rarity: Rarity, combat: CombatProfile) -> Self {
        EliteCard {
            identity: CardIdentity::new(name, cost, rarity),
            combat,
            spell_effects: Vec::new(),
            total_mana: 0,
        }
    }

    pub fn validate_attributes(&self) -> Result<()> {
        self.combat.validate(&self.identity.name)
    }
}

impl Playable for EliteCard {
    fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    fn kind(&self) -> CardKind {
        CardKind::Elite
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        pay_and_resolve(&self.identity, state, || "Magical effect".to_string())
    }

    fn card_info(&self) -> CardInfo {
        base_info(&self.identity, CardKind::Elite, self.combat.attributes())
    }
}

impl Combatant for EliteCard {
    fn attack_power(&self) -> i32 {
        self.combat.damage
    }

    fn defense_value(&self) -> i32 {
        self.combat.defense
    }

    fn health(&self) -> i32 {
        self.combat.health
    }

    fn combat_type(&self) -> Option<&str> {
        Some(&self.combat.combat_type)
    }
}

impl Caster for EliteCard {
    /// Casting costs nothing from the card's pool; the reported mana is the
    /// card's own cost.
    fn cast_spell(&mut self, spell_name: &str, targets: &[&str]) -> SpellCast {
        self.spell_effects.push(spell_name.to_string());
        SpellCast {
            caster: self.identity.name.clone(),
            spell: spell_name.to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
            mana_used: self.identity.cost,
        }
    }

    fn channel_mana(&mut self, amount: u32) -> ManaChannel {
        self.total_mana = self.total_mana.saturating_add(amount);
        ManaChannel {
            channeled: amount,
            total_mana: self.total_mana,
        }
    }

    fn magic_stats(&self) -> MagicStats {
        MagicStats {
            name: self.identity.name.clone(),
            mana: self.total_mana,
            spell_effects: self.spell_effects.clone(),
        }
    }
}
