//! Deck of cards with running per-variant statistics

use crate::core::{Card, CardKind, Playable};
use crate::{DeckError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Aggregate deck statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub creatures: usize,
    pub spells: usize,
    pub artifacts: usize,
    /// Mean mana cost, rounded to two decimals
    pub avg_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct KindCounts {
    creatures: usize,
    spells: usize,
    artifacts: usize,
}

impl KindCounts {
    fn slot(&mut self, kind: CardKind) -> Result<&mut usize> {
        match kind {
            CardKind::Creature => Ok(&mut self.creatures),
            CardKind::Spell => Ok(&mut self.spells),
            CardKind::Artifact => Ok(&mut self.artifacts),
            CardKind::Elite | CardKind::Tournament => Err(DeckError::UnsupportedCardType(kind)),
        }
    }

    fn total(&self) -> usize {
        self.creatures + self.spells + self.artifacts
    }
}

/// An ordered pile of creature, spell and artifact cards
///
/// The front of the deck is the next card drawn. The deck owns its shuffle
/// RNG so two decks built from the same seed shuffle identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
    counts: KindCounts,
    rng: ChaCha12Rng,
}

impl Deck {
    /// Create an empty deck whose shuffles are driven by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Deck {
            cards: VecDeque::new(),
            counts: KindCounts::default(),
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Reseed the shuffle RNG
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Append a card to the back of the deck.
    ///
    /// Only creatures, spells and artifacts belong in a deck; anything else is
    /// rejected before the deck is touched.
    pub fn add_card(&mut self, card: impl Into<Card>) -> Result<()> {
        let card = card.into();
        *self.counts.slot(card.kind())? += 1;
        self.cards.push_back(card);
        Ok(())
    }

    /// Remove the first card named `name`. Returns whether a card was removed.
    pub fn remove_card(&mut self, name: &str) -> bool {
        let Some(pos) = self.cards.iter().position(|c| c.name() == name) else {
            return false;
        };
        match self.cards.remove(pos) {
            Some(card) => {
                self.forget(&card);
                true
            }
            None => false,
        }
    }

    /// Shuffle the deck in place
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Remove and return the front card
    pub fn draw(&mut self) -> Result<Card> {
        let card = self.cards.pop_front().ok_or(DeckError::EmptyDeck)?;
        self.forget(&card);
        Ok(card)
    }

    /// Look at the front card without drawing it
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    pub fn get_stats(&self) -> Result<DeckStats> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyCollection("deck statistics"));
        }

        let total_cost: u64 = self.cards.iter().map(|c| c.cost() as u64).sum();
        let avg_cost = total_cost as f64 / self.cards.len() as f64;
        Ok(DeckStats {
            total_cards: self.counts.total(),
            creatures: self.counts.creatures,
            spells: self.counts.spells,
            artifacts: self.counts.artifacts,
            avg_cost: (avg_cost * 100.0).round() / 100.0,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn forget(&mut self, card: &Card) {
        if let Ok(slot) = self.counts.slot(card.kind()) {
            *slot -= 1;
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
