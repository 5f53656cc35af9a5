//! Creature cards

use crate::core::card::{base_info, pay_and_resolve};
use crate::core::{CardIdentity, CardInfo, CardKind, Combatant, GameState, Playable, PlayResult, Rarity};
use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// A creature with attack and health
///
/// Health doubles as the defense threshold when the creature defends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureCard {
    pub identity: CardIdentity,
    pub attack: i32,
    pub health: i32,
}

impl CreatureCard {
    pub fn new(name: &str, cost: u32, rarity: Rarity, attack: i32, health: i32) -> Self {
        CreatureCard {
            identity: CardIdentity::new(name, cost, rarity),
            attack,
            health,
        }
    }

    /// Check that the creature has a name and positive attack and health.
    /// Construction does not enforce this.
    pub fn validate_attributes(&self) -> Result<()> {
        if self.identity.name.is_empty() {
            return Err(DeckError::InvalidAttributes(
                "creature name must not be empty".to_string(),
            ));
        }
        if self.attack <= 0 || self.health <= 0 {
            return Err(DeckError::InvalidAttributes(format!(
                "{}: attack and health must be positive (got {}/{})",
                self.identity.name, self.attack, self.health
            )));
        }
        Ok(())
    }
}

impl Playable for CreatureCard {
    fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    fn kind(&self) -> CardKind {
        CardKind::Creature
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        pay_and_resolve(&self.identity, state, || {
            "Creature summoned to battlefield".to_string()
        })
    }

    fn card_info(&self) -> CardInfo {
        base_info(
            &self.identity,
            CardKind::Creature,
            [
                ("attack", self.attack.to_string()),
                ("health", self.health.to_string()),
            ],
        )
    }
}

impl Combatant for CreatureCard {
    fn attack_power(&self) -> i32 {
        self.attack
    }

    fn defense_value(&self) -> i32 {
        self.health
    }

    fn health(&self) -> i32 {
        self.health
    }
}
