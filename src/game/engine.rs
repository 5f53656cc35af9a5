//! Game engine: binds a factory and a strategy and drives simulated turns

use crate::core::Card;
use crate::game::factory::CardFactory;
use crate::game::logger::{GameLogger, VerbosityLevel};
use crate::game::strategy::{BattlefieldEntry, GameStrategy, Side, TurnReport};
use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// Damage total reported by [`GameEngine::get_engine_status`]. Fixed; the
/// damage actually dealt is tracked separately in `damage_dealt`.
pub const REPORTED_TOTAL_DAMAGE: i32 = 100;

/// Snapshot of a configured engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub turns_simulated: u32,
    pub cards_created: usize,
    pub strategy_used: String,
    pub total_damage: i32,
    /// Sum of damage reported by the strategy across all turns
    pub damage_dealt: i64,
}

/// Turn-based simulation engine
///
/// Both slots must be filled through [`GameEngine::configure_engine`] before
/// turns do anything.
pub struct GameEngine {
    factory: Option<Box<dyn CardFactory>>,
    strategy: Option<Box<dyn GameStrategy>>,
    turns_simulated: u32,
    damage_dealt: i64,
    pub logger: GameLogger,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            factory: None,
            strategy: None,
            turns_simulated: 0,
            damage_dealt: 0,
            logger: GameLogger::new(),
        }
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger.set_verbosity(verbosity);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.factory.is_some() && self.strategy.is_some()
    }

    pub fn turns_simulated(&self) -> u32 {
        self.turns_simulated
    }

    /// Install a factory and a strategy.
    ///
    /// The factory must advertise at least one card per variant (the engine
    /// deals a creature, a spell and an artifact each turn) and the strategy
    /// must have a name. On rejection the previous configuration is kept.
    pub fn configure_engine(
        &mut self,
        factory: Box<dyn CardFactory>,
        strategy: Box<dyn GameStrategy>,
    ) -> Result<()> {
        let supported = factory.supported_types();
        if supported.creatures.is_empty()
            || supported.spells.is_empty()
            || supported.artifacts.is_empty()
        {
            let reason = format!(
                "{} does not supply creatures, spells and artifacts",
                factory.factory_name()
            );
            self.logger.event("configuration", &format!("Rejected factory: {reason}"));
            return Err(DeckError::InvalidConfiguration(reason));
        }
        if strategy.strategy_name().trim().is_empty() {
            let reason = "strategy has no name".to_string();
            self.logger.event("configuration", &format!("Rejected strategy: {reason}"));
            return Err(DeckError::InvalidConfiguration(reason));
        }

        self.logger.event(
            "configuration",
            &format!(
                "Factory: {}, Strategy: {}",
                factory.factory_name(),
                strategy.strategy_name()
            ),
        );
        self.factory = Some(factory);
        self.strategy = Some(strategy);
        Ok(())
    }

    /// Simulate one turn.
    ///
    /// An unconfigured engine returns an empty report but still counts the
    /// turn.
    pub fn simulate_turn(&mut self) -> TurnReport {
        self.turns_simulated += 1;

        let (Some(factory), Some(strategy)) = (self.factory.as_mut(), self.strategy.as_mut()) else {
            self.logger.event("turn", "Engine is not properly configured");
            return TurnReport::default();
        };

        let hand: Vec<Card> = vec![
            factory.create_creature("Dragon".into()).into(),
            factory.create_spell("Fireball".into()).into(),
            factory.create_artifact("Magic Ring".into()).into(),
        ];
        let battlefield = vec![
            BattlefieldEntry::new(Side::Player, factory.create_creature("Gob".into())),
            BattlefieldEntry::new(Side::Enemy, factory.create_creature("Orc".into())),
        ];

        for card in &hand {
            self.logger.verbose(&format!("Hand: {card}"));
        }

        let report = strategy.execute_turn(&hand, &battlefield);
        self.damage_dealt += report.damage_dealt as i64;
        self.logger.event(
            "turn",
            &format!(
                "Turn {}: {} played {} card(s) for {} damage",
                self.turns_simulated,
                strategy.strategy_name(),
                report.cards_played.len(),
                report.damage_dealt
            ),
        );
        report
    }

    pub fn get_engine_status(&self) -> Result<EngineStatus> {
        let factory = self.factory.as_ref().ok_or(DeckError::NotConfigured("factory"))?;
        let strategy = self.strategy.as_ref().ok_or(DeckError::NotConfigured("strategy"))?;

        Ok(EngineStatus {
            turns_simulated: self.turns_simulated,
            cards_created: factory.cards_created(),
            strategy_used: strategy.strategy_name().to_string(),
            total_damage: REPORTED_TOTAL_DAMAGE,
            damage_dealt: self.damage_dealt,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("factory", &self.factory.as_ref().map(|x| x.factory_name().to_string()))
            .field("strategy", &self.strategy.as_ref().map(|x| x.strategy_name().to_string()))
            .field("turns_simulated", &self.turns_simulated)
            .finish()
    }
}
