//! Per-scenario game context passed into card plays

use serde::{Deserialize, Serialize};

/// Mutable context for a single simulation
///
/// Callers own the lifecycle: a state is created for a scenario, mutated by
/// `play` calls, and dropped when the scenario ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Mana available to pay card costs
    pub mana: u32,

    /// Player health
    pub health: i32,

    /// Effect descriptions of every card successfully played, oldest first
    pub effects: Vec<String>,
}

impl GameState {
    pub fn new(mana: u32, health: i32) -> Self {
        GameState {
            mana,
            health,
            effects: Vec::new(),
        }
    }

    /// Deduct `cost` from the mana pool. Returns false and leaves the pool
    /// untouched when there is not enough mana.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        match self.mana.checked_sub(cost) {
            Some(remaining) => {
                self.mana = remaining;
                true
            }
            None => false,
        }
    }

    pub fn record_effect(&mut self, effect: impl Into<String>) {
        self.effects.push(effect.into());
    }
}
