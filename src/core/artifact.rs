//! Artifact cards

use crate::core::card::{base_info, pay_and_resolve};
use crate::core::{CardIdentity, CardInfo, CardKind, GameState, Playable, PlayResult, Rarity};
use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// A permanent with durability and a standing effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCard {
    pub identity: CardIdentity,
    pub durability: i32,
    /// Effect text, e.g. "+1 mana per turn"
    pub effect: String,
}

impl ArtifactCard {
    pub fn new(name: &str, cost: u32, rarity: Rarity, durability: i32, effect: &str) -> Self {
        ArtifactCard {
            identity: CardIdentity::new(name, cost, rarity),
            durability,
            effect: effect.to_string(),
        }
    }

    pub fn activate_ability(&self) -> String {
        format!("Permanent: {}", self.effect)
    }

    pub fn validate_attributes(&self) -> Result<()> {
        if self.durability <= 0 {
            return Err(DeckError::InvalidAttributes(format!(
                "{}: durability must be positive (got {})",
                self.identity.name, self.durability
            )));
        }
        Ok(())
    }
}

impl Playable for ArtifactCard {
    fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    fn kind(&self) -> CardKind {
        CardKind::Artifact
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        pay_and_resolve(&self.identity, state, || self.activate_ability())
    }

    fn card_info(&self) -> CardInfo {
        base_info(
            &self.identity,
            CardKind::Artifact,
            [
                ("durability", self.durability.to_string()),
                ("effect", self.effect.clone()),
            ],
        )
    }
}
