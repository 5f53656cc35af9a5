//! Strategy trait and the battlefield view it decides over
//!
//! The engine hands a strategy the current hand and battlefield; the strategy
//! decides which cards to commit and which targets to hit, and reports what
//! it did.

use crate::core::{Card, Playable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health assumed for targets that have none, so they sort after every real
/// combatant
pub const MISSING_HEALTH_PRIORITY: i32 = i32::MAX;

/// Which side of the table a battlefield card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// A card on the battlefield and who controls it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlefieldEntry {
    pub owner: Side,
    pub card: Card,
}

impl BattlefieldEntry {
    pub fn new(owner: Side, card: impl Into<Card>) -> Self {
        BattlefieldEntry {
            owner,
            card: card.into(),
        }
    }

    /// Health of the card if it is a combatant
    pub fn health(&self) -> Option<i32> {
        self.card.as_combatant().map(|c| c.health())
    }

    pub fn name(&self) -> &str {
        self.card.name().as_str()
    }
}

/// What a strategy did during one turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Cards committed, formatted as "name (attack)"
    pub cards_played: Vec<String>,
    pub targets_attacked: Vec<String>,
    pub damage_dealt: i32,
}

impl TurnReport {
    pub fn is_empty(&self) -> bool {
        self.cards_played.is_empty() && self.targets_attacked.is_empty() && self.damage_dealt == 0
    }
}

/// Strategy role
///
/// Implement this trait to plug a new decision policy into the engine.
pub trait GameStrategy: Send {
    /// Stable identifying label
    fn strategy_name(&self) -> &str;

    /// Decide and report one turn for `hand` against `battlefield`
    fn execute_turn(&mut self, hand: &[Card], battlefield: &[BattlefieldEntry]) -> TurnReport;

    /// Order targets by attack preference, most preferred first
    fn prioritize_targets(&self, targets: Vec<BattlefieldEntry>) -> Vec<BattlefieldEntry>;
}

/// Lowest-health-first ordering shared by strategies that go for the
/// quickest kill. Stable, so equal-health targets keep battlefield order.
pub fn lowest_health_first(mut targets: Vec<BattlefieldEntry>) -> Vec<BattlefieldEntry> {
    targets.sort_by_key(|t| t.health().unwrap_or(MISSING_HEALTH_PRIORITY));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtifactCard, CreatureCard, Rarity};

    #[test]
    fn test_lowest_health_first() {
        let targets = vec![
            BattlefieldEntry::new(Side::Enemy, CreatureCard::new("Orc", 2, Rarity::Common, 3, 8)),
            BattlefieldEntry::new(Side::Enemy, ArtifactCard::new("Totem", 1, Rarity::Common, 3, "ward")),
            BattlefieldEntry::new(Side::Player, CreatureCard::new("Gob", 1, Rarity::Common, 1, 2)),
            BattlefieldEntry::new(Side::Enemy, CreatureCard::new("Imp", 1, Rarity::Common, 1, 2)),
        ];

        let names: Vec<String> = lowest_health_first(targets)
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["Gob", "Imp", "Orc", "Totem"]);
    }

    #[test]
    fn test_entry_health() {
        let orc = BattlefieldEntry::new(Side::Enemy, CreatureCard::new("Orc", 2, Rarity::Common, 3, 8));
        assert_eq!(orc.health(), Some(8));
        assert_eq!(orc.owner.to_string(), "enemy");
    }

    #[test]
    fn test_empty_report() {
        assert!(TurnReport::default().is_empty());
    }
}
