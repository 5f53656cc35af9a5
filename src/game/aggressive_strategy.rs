//! Aggressive strategy: commit every combatant, hit every target

use crate::core::{Card, Playable};
use crate::game::strategy::{lowest_health_first, BattlefieldEntry, GameStrategy, TurnReport};

/// Plays every combat-capable card in hand and attacks every battlefield
/// target, weakest first. Total damage is the sum of the committed cards'
/// attack power.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveStrategy;

impl AggressiveStrategy {
    pub fn new() -> Self {
        AggressiveStrategy
    }
}

impl GameStrategy for AggressiveStrategy {
    fn strategy_name(&self) -> &str {
        "AggressiveStrategy"
    }

    fn execute_turn(&mut self, hand: &[Card], battlefield: &[BattlefieldEntry]) -> TurnReport {
        let attackers: Vec<_> = hand.iter().filter_map(|card| card.as_combatant()).collect();

        TurnReport {
            cards_played: attackers
                .iter()
                .map(|c| format!("{} ({})", c.name(), c.attack_power()))
                .collect(),
            targets_attacked: self
                .prioritize_targets(battlefield.to_vec())
                .iter()
                .map(|t| t.name().to_string())
                .collect(),
            damage_dealt: attackers.iter().map(|c| c.attack_power()).sum(),
        }
    }

    fn prioritize_targets(&self, targets: Vec<BattlefieldEntry>) -> Vec<BattlefieldEntry> {
        lowest_health_first(targets)
    }
}
