//! Card Foundation Demo
//!
//! Builds a single creature card, inspects it, plays it against a mana pool
//! and sends it into an attack.

use datadeck::core::{Combatant, CreatureCard, GameState, Playable, Rarity};

fn main() -> datadeck::Result<()> {
    println!("=== DataDeck - Card Foundation ===\n");

    let dragon = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5);
    dragon.validate_attributes()?;

    println!("CreatureCard Info:");
    println!("  {}\n", dragon.card_info());

    println!("Playing {} with 6 mana available:", dragon.name());
    println!("  Playable: {}", dragon.is_playable(6));

    let mut state = GameState::new(11, 20);
    let result = dragon.play(&mut state);
    println!("  Play result: {:?}", result);
    println!("  Mana remaining: {}\n", state.mana);

    println!("Fire Dragon attacks Goblin Warrior:");
    let attack = dragon.attack("Goblin Warrior");
    println!("  Attack result: {:?}\n", attack);

    println!("Testing insufficient mana (3 available):");
    println!("  Playable: {}", dragon.is_playable(3));

    Ok(())
}
