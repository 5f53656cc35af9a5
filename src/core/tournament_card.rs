//! Tournament cards: ranked combatants

use crate::core::card::{base_info, pay_and_resolve};
use crate::core::{
    CardIdentity, CardInfo, CardKind, CombatProfile, Combatant, GameState, Playable, PlayResult,
    Ranked, Rarity, LOSS_PENALTY, WIN_BONUS,
};
use crate::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Range the initial rating of a new tournament card is rolled from
pub const INITIAL_RATING_RANGE: RangeInclusive<i64> = 1..=10;

/// Full tournament view of a card: record plus combat numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub name: String,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
    pub combat: CombatProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentCard {
    pub identity: CardIdentity,
    pub combat: CombatProfile,
    initial_rating: i64,
    wins: u32,
    losses: u32,
}

impl TournamentCard {
    /// Create a card with its initial rating rolled from `rng`
    pub fn new(
        name: &str,
        cost: u32,
        rarity: Rarity,
        combat: CombatProfile,
        rng: &mut impl Rng,
    ) -> Self {
        let rating = rng.gen_range(INITIAL_RATING_RANGE);
        Self::with_rating(name, cost, rarity, combat, rating)
    }

    /// Create a card with a known initial rating
    pub fn with_rating(
        name: &str,
        cost: u32,
        rarity: Rarity,
        combat: CombatProfile,
        rating: i64,
    ) -> Self {
        TournamentCard {
            identity: CardIdentity::new(name, cost, rarity),
            combat,
            initial_rating: rating,
            wins: 0,
            losses: 0,
        }
    }

    pub fn initial_rating(&self) -> i64 {
        self.initial_rating
    }

    pub fn validate_attributes(&self) -> Result<()> {
        self.combat.validate(&self.identity.name)
    }

    pub fn tournament_stats(&self) -> TournamentStats {
        TournamentStats {
            name: self.identity.name.to_string(),
            rating: self.calculate_rating(),
            wins: self.wins,
            losses: self.losses,
            combat: self.combat.clone(),
        }
    }
}

impl Playable for TournamentCard {
    fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    fn kind(&self) -> CardKind {
        CardKind::Tournament
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        pay_and_resolve(&self.identity, state, || "Magical effect".to_string())
    }

    fn card_info(&self) -> CardInfo {
        let [damage, defense, health, combat_type] = self.combat.attributes();
        base_info(
            &self.identity,
            CardKind::Tournament,
            [
                damage,
                defense,
                health,
                combat_type,
                ("rating", self.calculate_rating().to_string()),
            ],
        )
    }
}

impl Combatant for TournamentCard {
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

impl Ranked for TournamentCard {
    fn calculate_rating(&self) -> i64 {
        self.initial_rating
            .saturating_add(WIN_BONUS * i64::from(self.wins))
            .saturating_sub(LOSS_PENALTY * i64::from(self.losses))
    }

    /// Counters saturate at `u32::MAX`
    fn update_wins(&mut self, wins: u32) {
        self.wins = self.wins.saturating_add(wins);
    }

    fn update_losses(&mut self, losses: u32) {
        self.losses = self.losses.saturating_add(losses);
    }

    fn wins(&self) -> u32 {
        self.wins
    }

    fn losses(&self) -> u32 {
        self.losses
    }
}
