//! Game engine wiring with factories and strategies

use datadeck::core::{Card, CreatureCard, Playable, Rarity};
use datadeck::game::{
    AggressiveStrategy, BattlefieldEntry, CardFactory, FantasyCardFactory, GameEngine,
    GameStrategy, TurnReport, REPORTED_TOTAL_DAMAGE,
};
use datadeck::{DeckError, Result};
use similar_asserts::assert_eq;

/// Plays nothing and attacks nothing
struct PassiveStrategy;

impl GameStrategy for PassiveStrategy {
    fn strategy_name(&self) -> &str {
        "PassiveStrategy"
    }

    fn execute_turn(&mut self, _hand: &[Card], _battlefield: &[BattlefieldEntry]) -> TurnReport {
        TurnReport::default()
    }

    fn prioritize_targets(&self, targets: Vec<BattlefieldEntry>) -> Vec<BattlefieldEntry> {
        targets
    }
}

/// Strategy without a name; engines refuse it
struct Anonymous;

impl GameStrategy for Anonymous {
    fn strategy_name(&self) -> &str {
        ""
    }

    fn execute_turn(&mut self, _hand: &[Card], _battlefield: &[BattlefieldEntry]) -> TurnReport {
        TurnReport::default()
    }

    fn prioritize_targets(&self, targets: Vec<BattlefieldEntry>) -> Vec<BattlefieldEntry> {
        targets
    }
}

fn engine_with(strategy: Box<dyn GameStrategy>, seed: u64) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    engine.logger.enable_capture();
    engine.configure_engine(Box::new(FantasyCardFactory::with_seed(seed)), strategy)?;
    Ok(engine)
}

#[test]
fn test_aggressive_turn() -> Result<()> {
    let mut engine = engine_with(Box::new(AggressiveStrategy::new()), 42)?;
    let report = engine.simulate_turn();

    assert_eq!(report.cards_played.len(), 1);
    assert_eq!(report.targets_attacked.len(), 2);
    assert!(report.damage_dealt > 0);

    let status = engine.get_engine_status()?;
    assert_eq!(status.turns_simulated, 1);
    assert_eq!(status.cards_created, 5);
    assert_eq!(status.strategy_used.as_str(), "AggressiveStrategy");
    assert_eq!(status.total_damage, REPORTED_TOTAL_DAMAGE);
    assert!(engine.logger.contains("AggressiveStrategy"));
    Ok(())
}

#[test]
fn test_strategies_are_interchangeable() -> Result<()> {
    let mut engine = engine_with(Box::new(PassiveStrategy), 1)?;
    assert!(engine.simulate_turn().is_empty());

    engine.configure_engine(
        Box::new(FantasyCardFactory::with_seed(1)),
        Box::new(AggressiveStrategy::new()),
    )?;
    assert!(!engine.simulate_turn().is_empty());

    let status = engine.get_engine_status()?;
    assert_eq!(status.turns_simulated, 2);
    assert_eq!(status.strategy_used.as_str(), "AggressiveStrategy");
    Ok(())
}

#[test]
fn test_nameless_strategy_is_rejected() {
    let mut engine = GameEngine::new();
    engine.logger.enable_capture();
    let result = engine.configure_engine(
        Box::new(FantasyCardFactory::default()),
        Box::new(Anonymous),
    );

    assert!(matches!(result, Err(DeckError::InvalidConfiguration(_))));
    assert!(!engine.is_configured());
}

#[test]
fn test_same_seed_same_turns() -> Result<()> {
    let run = |seed| -> Result<Vec<TurnReport>> {
        let mut engine = engine_with(Box::new(AggressiveStrategy::new()), seed)?;
        Ok((0..5).map(|_| engine.simulate_turn()).collect())
    };
    assert_eq!(run(8)?, run(8)?);
    Ok(())
}

#[test]
fn test_factory_power_blueprint() {
    let mut factory = FantasyCardFactory::with_seed(0);
    let creature = factory.create_creature(4u32.into());
    assert_eq!(creature, CreatureCard::new("Generic Creature", 5, Rarity::Rare, 4, 100));
    assert_eq!(creature.name().as_str(), "Generic Creature");
    assert_eq!(factory.cards_created(), 1);
}

#[test]
fn test_reseeded_factory_repeats_cards() {
    let mut factory = FantasyCardFactory::with_seed(0);
    factory.seed_rng(13);
    let first = factory.create_themed_deck(6);
    factory.seed_rng(13);
    assert_eq!(factory.create_themed_deck(6), first);
    assert_eq!(factory.cards_created(), 12);
}

#[test]
fn test_components_move_across_threads() -> Result<()> {
    let engine = engine_with(Box::new(AggressiveStrategy::new()), 3)?;
    let platform = datadeck::tournament::TournamentPlatform::with_seed(3);
    let deck = FantasyCardFactory::with_seed(3).build_deck(6, 3)?;

    let handle = std::thread::spawn(move || (engine.turns_simulated(), platform.len(), deck.len()));
    assert_eq!(handle.join().expect("worker thread panicked"), (0, 0, 6));
    Ok(())
}
