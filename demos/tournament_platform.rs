//! Tournament Platform Demo
//!
//! Registers two tournament cards, plays a match between them and prints the
//! leaderboard and platform report.

use datadeck::core::{CombatProfile, Rarity, TournamentCard};
use datadeck::tournament::TournamentPlatform;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn main() -> datadeck::Result<()> {
    println!("=== DataDeck - Tournament Platform ===\n");

    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let dragon = TournamentCard::new(
        "Fire Dragon",
        5,
        Rarity::Epic,
        CombatProfile::new(50, 30, 100, "Fire"),
        &mut rng,
    );
    let wizard = TournamentCard::new(
        "Ice Wizard",
        4,
        Rarity::Rare,
        CombatProfile::new(40, 20, 80, "Ice"),
        &mut rng,
    );

    let mut platform = TournamentPlatform::with_seed(42);
    let dragon_id = platform.register_card(dragon);
    let wizard_id = platform.register_card(wizard);

    for id in [&dragon_id, &wizard_id] {
        let info = platform.card_info(id)?;
        println!("{}:", info.name);
        println!("  Interfaces: {:?}", info.interfaces);
        println!("  Rating: {}", info.rating);
        println!("  Record: {}", info.record);
    }

    println!("\nCreating tournament match...");
    let result = platform.create_match(&dragon_id, &wizard_id)?;
    println!("Match result: {:?}\n", result);

    println!("Tournament Leaderboard:");
    for entry in &platform.get_leaderboard().standings {
        println!(
            "{}. {} - Rating: {} ({}-{})",
            entry.rank, entry.name, entry.rating, entry.wins, entry.losses
        );
    }

    println!("\nPlatform Report: {:?}", platform.generate_tournament_report()?);

    Ok(())
}
