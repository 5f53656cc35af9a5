//! Ability System Demo
//!
//! An elite card is both a combatant and a caster. This walks it through a
//! combat phase, a magic phase and finally plays it.

use datadeck::core::{
    Caster, CombatProfile, Combatant, EliteCard, GameState, Playable, Rarity,
};

fn main() -> datadeck::Result<()> {
    println!("=== DataDeck - Ability System ===\n");

    let mut warrior = EliteCard::new(
        "Arcane Warrior",
        6,
        Rarity::Epic,
        CombatProfile::new(5, 3, 10, "melee"),
    );
    warrior.validate_attributes()?;
    println!("{}\n", warrior.card_info());

    println!("Combat phase:");
    println!("  Attack result: {:?}", warrior.attack("Enemy"));
    println!("  Defense result: {:?}\n", warrior.defend(2));

    println!("Magic phase:");
    println!(
        "  Spell cast: {:?}",
        warrior.cast_spell("Fireball", &["Enemy1", "Enemy2"])
    );
    println!("  Mana channel: {:?}", warrior.channel_mana(4));
    println!("  Mana channel: {:?}", warrior.channel_mana(3));
    println!("  Magic stats: {:?}\n", warrior.magic_stats());

    let mut state = GameState::new(20, 20);
    println!("Playing {}: {:?}", warrior.name(), warrior.play(&mut state));
    println!("Combat stats: {:?}", warrior.combat_stats());

    Ok(())
}
