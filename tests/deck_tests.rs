//! Deck composition, shuffling and drawing

use datadeck::core::{
    ArtifactCard, CombatProfile, CreatureCard, EffectType, EliteCard, GameState, Playable, Rarity,
    SpellCard,
};
use datadeck::deck::Deck;
use datadeck::game::{CardFactory, FantasyCardFactory};
use datadeck::{DeckError, Result};
use similar_asserts::assert_eq;

fn starter_deck(seed: u64) -> Result<Deck> {
    let mut deck = Deck::with_seed(seed);
    deck.add_card(SpellCard::new("Lightning Bolt", 3, Rarity::Common, EffectType::Damage))?;
    deck.add_card(ArtifactCard::new("Mana Crystal", 2, Rarity::Rare, 5, "+1 mana per turn"))?;
    deck.add_card(CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5))?;
    Ok(deck)
}

#[test]
fn test_starter_deck_stats() -> Result<()> {
    let stats = starter_deck(0)?.get_stats()?;
    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.creatures, 1);
    assert_eq!(stats.spells, 1);
    assert_eq!(stats.artifacts, 1);
    assert_eq!(stats.avg_cost, 3.33);
    Ok(())
}

#[test]
fn test_draw_and_play_everything() -> Result<()> {
    let mut deck = starter_deck(7)?;
    deck.shuffle();

    let mut state = GameState::new(10, 20);
    let mut played = 0;
    while !deck.is_empty() {
        let card = deck.draw()?;
        if card.play(&mut state).was_played() {
            played += 1;
        }
    }

    assert_eq!(played, 3);
    assert_eq!(state.mana, 0);
    assert_eq!(state.effects.len(), 3);
    assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
    assert!(deck.draw().is_err_and(|e| e.is_empty_collection()));
    assert_eq!(deck.get_stats(), Err(DeckError::EmptyCollection("deck statistics")));
    Ok(())
}

#[test]
fn test_same_seed_same_order() -> Result<()> {
    let order = |seed| -> Result<Vec<String>> {
        let mut deck = FantasyCardFactory::with_seed(3).build_deck(12, seed)?;
        deck.shuffle();
        Ok(deck.iter().map(|c| c.name().to_string()).collect())
    };
    assert_eq!(order(99)?, order(99)?);
    Ok(())
}

#[test]
fn test_elite_is_rejected() -> Result<()> {
    let mut deck = starter_deck(0)?;
    let elite = EliteCard::new("Arcane Warrior", 6, Rarity::Epic, CombatProfile::new(5, 3, 10, "melee"));

    assert!(matches!(
        deck.add_card(elite),
        Err(DeckError::UnsupportedCardType(_))
    ));
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.get_stats()?.total_cards, 3);
    Ok(())
}

#[test]
fn test_remove_card_updates_counts() -> Result<()> {
    let mut deck = starter_deck(0)?;
    assert!(deck.remove_card("Mana Crystal"));
    assert!(!deck.remove_card("Mana Crystal"));

    let stats = deck.get_stats()?;
    assert_eq!(stats.artifacts, 0);
    assert_eq!(stats.total_cards, 2);
    assert_eq!(stats.avg_cost, 4.0);
    Ok(())
}

#[test]
fn test_built_deck_has_balanced_themes() -> Result<()> {
    let mut factory = FantasyCardFactory::with_seed(11);
    let deck = factory.build_deck(10, 5)?;

    let stats = deck.get_stats()?;
    assert_eq!(stats.total_cards, 9);
    assert_eq!((stats.creatures, stats.spells, stats.artifacts), (3, 3, 3));
    assert_eq!(factory.cards_created(), 9);
    Ok(())
}

#[test]
fn test_serialized_deck_shuffles_identically() -> Result<()> {
    let mut original = FantasyCardFactory::with_seed(4).build_deck(9, 21)?;
    let json = serde_json::to_string(&original).expect("Failed to serialize deck");
    let mut restored: Deck = serde_json::from_str(&json).expect("Failed to deserialize deck");

    for _ in 0..3 {
        original.shuffle();
        restored.shuffle();
        let a: Vec<String> = original.iter().map(|c| c.name().to_string()).collect();
        let b: Vec<String> = restored.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn test_reseeded_deck_replays_shuffle() -> Result<()> {
    let mut deck = FantasyCardFactory::with_seed(2).build_deck(9, 1)?;
    let names = |deck: &Deck| -> Vec<String> { deck.iter().map(|c| c.name().to_string()).collect() };
    let start = names(&deck);

    deck.seed_rng(77);
    deck.shuffle();
    let first = names(&deck);
    let top = deck.peek().map(|c| c.name().to_string());

    let mut replay = FantasyCardFactory::with_seed(2).build_deck(9, 1)?;
    assert_eq!(names(&replay), start);
    replay.seed_rng(77);
    replay.shuffle();
    assert_eq!(names(&replay), first);
    assert_eq!(replay.draw()?.name().to_string(), top.unwrap_or_default());
    Ok(())
}
