//! DataDeck - command-line simulations
//!
//! Runs engine turns or a seeded round-robin tournament and prints the
//! results, as text or JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use datadeck::{
    core::{CombatProfile, Rarity, TournamentCard},
    game::{AggressiveStrategy, FantasyCardFactory, GameEngine, VerbosityLevel},
    tournament::TournamentPlatform,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::Serialize;

/// Names handed out to generated tournament cards
const ROSTER: [(&str, &str); 8] = [
    ("Fire Dragon", "Fire"),
    ("Ice Wizard", "Ice"),
    ("Storm Giant", "Lightning"),
    ("Shadow Assassin", "Shadow"),
    ("Stone Golem", "Earth"),
    ("Sky Serpent", "Wind"),
    ("Arcane Warrior", "melee"),
    ("Plague Rat", "Poison"),
];

#[derive(Parser)]
#[command(name = "datadeck")]
#[command(about = "DataDeck - trading card game simulations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate engine turns with the fantasy factory and aggressive strategy
    Simulate {
        /// Number of turns to simulate
        #[arg(long, short = 't', default_value_t = 3)]
        turns: u32,

        /// Random seed for deterministic runs
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityLevel,

        /// Print the final status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register generated tournament cards and play a round-robin
    Tourney {
        /// Number of cards to register
        #[arg(long, short = 'c', default_value_t = 4)]
        cards: usize,

        /// Number of round-robin rounds
        #[arg(long, short = 'r', default_value_t = 1)]
        rounds: usize,

        /// Random seed for deterministic runs
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityLevel,

        /// Print the leaderboard and report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            turns,
            seed,
            verbosity,
            json,
        } => run_simulate(turns, seed, verbosity, json),
        Commands::Tourney {
            cards,
            rounds,
            seed,
            verbosity,
            json,
        } => run_tourney(cards, rounds, seed, verbosity, json),
    }
}

fn run_simulate(turns: u32, seed: u64, verbosity: VerbosityLevel, json: bool) -> anyhow::Result<()> {
    let mut engine = GameEngine::new().with_verbosity(verbosity);
    if json {
        engine.logger.enable_capture();
    }
    engine.configure_engine(
        Box::new(FantasyCardFactory::with_seed(seed)),
        Box::new(AggressiveStrategy::new()),
    )?;

    let mut reports = Vec::with_capacity(turns as usize);
    for _ in 0..turns {
        reports.push(engine.simulate_turn());
    }
    let status = engine.get_engine_status()?;

    if json {
        print_json(&serde_json::json!({ "turns": reports, "status": status }))?;
    } else {
        println!("=== DataDeck Game Engine ===");
        for (i, report) in reports.iter().enumerate() {
            println!(
                "Turn {}: {:?} -> {:?} ({} damage)",
                i + 1,
                report.cards_played,
                report.targets_attacked,
                report.damage_dealt
            );
        }
        println!("\nGame report:");
        println!("  Turns simulated: {}", status.turns_simulated);
        println!("  Cards created: {}", status.cards_created);
        println!("  Strategy: {}", status.strategy_used);
        println!("  Damage dealt: {}", status.damage_dealt);
    }
    Ok(())
}

fn run_tourney(
    cards: usize,
    rounds: usize,
    seed: u64,
    verbosity: VerbosityLevel,
    json: bool,
) -> anyhow::Result<()> {
    if cards < 2 {
        anyhow::bail!("Tournament requires at least 2 cards (got {cards})");
    }

    let mut platform = TournamentPlatform::with_seed(seed).with_verbosity(verbosity);
    if json {
        // Keep stdout clean for the JSON document
        platform.logger.enable_capture();
    }

    // Card stats come from a stream separate from the platform's match RNG
    let mut card_rng = ChaCha12Rng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
    for i in 0..cards {
        let (name, combat_type) = ROSTER[i % ROSTER.len()];
        let profile = CombatProfile::new(
            card_rng.gen_range(20..=60),
            card_rng.gen_range(10..=40),
            card_rng.gen_range(60..=120),
            combat_type,
        );
        let cost = card_rng.gen_range(2..=7);
        let card = TournamentCard::new(name, cost, Rarity::Rare, profile, &mut card_rng);
        platform.register_card(card);
    }

    platform
        .run_round_robin(rounds)
        .context("round-robin failed")?;
    let leaderboard = platform.get_leaderboard();
    let report = platform.generate_tournament_report()?;

    if json {
        print_json(&serde_json::json!({ "leaderboard": leaderboard, "report": report }))?;
    } else {
        println!("\nPlatform Report:");
        println!("  Total cards: {}", report.total_cards);
        println!("  Matches played: {}", report.matches_played);
        println!("  Average rating: {:.2}", report.avg_rating);
        println!("  Status: {}", report.platform_status);
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{text}");
    Ok(())
}
