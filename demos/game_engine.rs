//! Game Engine Demo
//!
//! Plugs the fantasy factory and the aggressive strategy into the engine,
//! simulates a turn and prints the engine status.

use datadeck::game::{
    AggressiveStrategy, CardFactory, FantasyCardFactory, GameEngine, VerbosityLevel,
};

fn main() -> datadeck::Result<()> {
    println!("=== DataDeck - Game Engine ===\n");

    let factory = FantasyCardFactory::with_seed(42);
    println!("Available types: {:?}\n", factory.supported_types());

    let mut engine = GameEngine::new().with_verbosity(VerbosityLevel::Verbose);
    engine.configure_engine(Box::new(factory), Box::new(AggressiveStrategy::new()))?;

    println!("\nSimulating aggressive turn...");
    let report = engine.simulate_turn();
    println!("  Cards played: {:?}", report.cards_played);
    println!("  Targets attacked: {:?}", report.targets_attacked);
    println!("  Damage dealt: {}\n", report.damage_dealt);

    println!("Game Report: {:?}", engine.get_engine_status()?);

    Ok(())
}
