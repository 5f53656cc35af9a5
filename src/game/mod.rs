//! Game simulation: factories, strategies, the engine and its logger

pub mod aggressive_strategy;
pub mod engine;
pub mod factory;
pub mod logger;
pub mod strategy;

pub use aggressive_strategy::AggressiveStrategy;
pub use engine::{EngineStatus, GameEngine, REPORTED_TOTAL_DAMAGE};
pub use factory::{Blueprint, CardFactory, FantasyCardFactory, SupportedTypes, ThemedDeck};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use strategy::{BattlefieldEntry, GameStrategy, Side, TurnReport};
