//! Deck Builder Demo
//!
//! Mixes creatures, spells and artifacts in one deck, prints the deck
//! statistics and plays every card in draw order.

use datadeck::core::{
    ArtifactCard, CreatureCard, EffectType, GameState, Playable, Rarity, SpellCard,
};
use datadeck::deck::Deck;

fn main() -> datadeck::Result<()> {
    println!("=== DataDeck - Deck Builder ===\n");

    let mut deck = Deck::with_seed(7);
    deck.add_card(SpellCard::new("Lightning Bolt", 3, Rarity::Common, EffectType::Damage))?;
    deck.add_card(ArtifactCard::new("Mana Crystal", 2, Rarity::Rare, 5, "+1 mana per turn"))?;
    deck.add_card(CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5))?;

    println!("Deck stats: {:?}\n", deck.get_stats()?);

    deck.shuffle();
    if let Some(top) = deck.peek() {
        println!("Top card after shuffle: {top}\n");
    }
    let mut state = GameState::new(10, 20);
    println!("Drawing and playing cards:");
    while !deck.is_empty() {
        let card = deck.draw()?;
        let result = card.play(&mut state);
        println!("  Drew: {card}");
        println!("    Play result: {:?}", result);
    }
    println!("\nMana remaining: {}", state.mana);
    println!("Effects: {:?}", state.effects);

    Ok(())
}
