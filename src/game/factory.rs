//! Card factories: themed card and deck construction
//!
//! A factory turns a [`Blueprint`] (a card name or a bare power level) into a
//! concrete card. Named cards get randomized stats from the factory's own
//! seeded RNG; power-level cards come from a fixed template.

use crate::core::{ArtifactCard, Card, CreatureCard, EffectType, Rarity, SpellCard};
use crate::deck::Deck;
use crate::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Range randomized stats are rolled from for named cards
pub const RANDOM_POWER_RANGE: RangeInclusive<u32> = 1..=5;

/// What to build: a named card with rolled stats, or a template card of a
/// given power
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blueprint {
    Named(String),
    Power(u32),
}

impl From<&str> for Blueprint {
    fn from(name: &str) -> Self {
        Blueprint::Named(name.to_string())
    }
}

impl From<String> for Blueprint {
    fn from(name: String) -> Self {
        Blueprint::Named(name)
    }
}

impl From<u32> for Blueprint {
    fn from(power: u32) -> Self {
        Blueprint::Power(power)
    }
}

/// A themed set of cards split evenly across the three deck variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemedDeck {
    pub creatures: Vec<CreatureCard>,
    pub spells: Vec<SpellCard>,
    pub artifacts: Vec<ArtifactCard>,
}

impl ThemedDeck {
    pub fn len(&self) -> usize {
        self.creatures.len() + self.spells.len() + self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into creatures, then spells, then artifacts
    pub fn into_cards(self) -> Vec<Card> {
        self.creatures
            .into_iter()
            .map(Card::from)
            .chain(self.spells.into_iter().map(Card::from))
            .chain(self.artifacts.into_iter().map(Card::from))
            .collect()
    }
}

/// Example card names a factory knows, per variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    pub creatures: Vec<String>,
    pub spells: Vec<String>,
    pub artifacts: Vec<String>,
}

/// Factory role
///
/// Every successful creation bumps the counter reported by
/// [`CardFactory::cards_created`].
pub trait CardFactory: Send {
    fn factory_name(&self) -> &str;

    fn create_creature(&mut self, blueprint: Blueprint) -> CreatureCard;

    fn create_spell(&mut self, blueprint: Blueprint) -> SpellCard;

    fn create_artifact(&mut self, blueprint: Blueprint) -> ArtifactCard;

    /// Build `size / 3` cards of each variant. Remainder cards are dropped.
    fn create_themed_deck(&mut self, size: usize) -> ThemedDeck;

    fn supported_types(&self) -> SupportedTypes;

    fn cards_created(&self) -> usize;

    /// Pour a themed set into a fresh deck shuffled from `seed`
    fn build_deck(&mut self, size: usize, seed: u64) -> Result<Deck> {
        let mut deck = Deck::with_seed(seed);
        for card in self.create_themed_deck(size).into_cards() {
            deck.add_card(card)?;
        }
        deck.shuffle();
        Ok(deck)
    }
}

/// Fantasy-themed factory: dragons, fireballs and magic rings
#[derive(Debug, Clone)]
pub struct FantasyCardFactory {
    rng: ChaCha12Rng,
    cards_created: usize,
}

impl FantasyCardFactory {
    pub const CREATURE_THEME: &'static str = "Dragon";
    pub const SPELL_THEME: &'static str = "Fireball";
    pub const ARTIFACT_THEME: &'static str = "Magic Ring";

    pub fn with_seed(seed: u64) -> Self {
        FantasyCardFactory {
            rng: ChaCha12Rng::seed_from_u64(seed),
            cards_created: 0,
        }
    }

    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    fn roll_power(&mut self) -> u32 {
        self.rng.gen_range(RANDOM_POWER_RANGE)
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for FantasyCardFactory {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl CardFactory for FantasyCardFactory {
    fn factory_name(&self) -> &str {
        "FantasyCardFactory"
    }

    fn create_creature(&mut self, blueprint: Blueprint) -> CreatureCard {
        let card = match blueprint {
            Blueprint::Named(name) => {
                let attack = self.roll_power() as i32;
                CreatureCard::new(&name, 5, Rarity::Rare, attack, 100)
            }
            Blueprint::Power(power) => {
                CreatureCard::new("Generic Creature", 5, Rarity::Rare, power as i32, 100)
            }
        };
        self.cards_created += 1;
        card
    }

    fn create_spell(&mut self, blueprint: Blueprint) -> SpellCard {
        let card = match blueprint {
            Blueprint::Named(name) => {
                let cost = self.roll_power();
                SpellCard::new(&name, cost, Rarity::Rare, EffectType::Damage)
            }
            Blueprint::Power(power) => {
                SpellCard::new("Generic Spell", power, Rarity::Rare, EffectType::Damage)
            }
        };
        self.cards_created += 1;
        card
    }

    fn create_artifact(&mut self, blueprint: Blueprint) -> ArtifactCard {
        let card = match blueprint {
            Blueprint::Named(name) => {
                ArtifactCard::new(&name, 5, Rarity::Rare, 15, EffectType::Damage.as_str())
            }
            Blueprint::Power(power) => ArtifactCard::new(
                "Generic Artifact",
                5,
                Rarity::Rare,
                power as i32,
                EffectType::Damage.as_str(),
            ),
        };
        self.cards_created += 1;
        card
    }

    fn create_themed_deck(&mut self, size: usize) -> ThemedDeck {
        let per_type = size / 3;
        ThemedDeck {
            creatures: (0..per_type)
                .map(|_| self.create_creature(Self::CREATURE_THEME.into()))
                .collect(),
            spells: (0..per_type)
                .map(|_| self.create_spell(Self::SPELL_THEME.into()))
                .collect(),
            artifacts: (0..per_type)
                .map(|_| self.create_artifact(Self::ARTIFACT_THEME.into()))
                .collect(),
        }
    }

    fn supported_types(&self) -> SupportedTypes {
        SupportedTypes {
            creatures: names(&["Dragon", "Goblin", "Lightning Bolt"]),
            spells: names(&["Fireball"]),
            artifacts: names(&["mana_ring"]),
        }
    }

    fn cards_created(&self) -> usize {
        self.cards_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardKind, Playable};

    #[test]
    fn test_named_creature_rolls_attack() {
        let mut factory = FantasyCardFactory::with_seed(3);
        for _ in 0..20 {
            let dragon = factory.create_creature("Dragon".into());
            assert_eq!(dragon.name().as_str(), "Dragon");
            assert!(RANDOM_POWER_RANGE.contains(&(dragon.attack as u32)));
            assert_eq!(dragon.health, 100);
            assert_eq!(dragon.cost(), 5);
        }
        assert_eq!(factory.cards_created(), 20);
    }

    #[test]
    fn test_power_templates() {
        let mut factory = FantasyCardFactory::default();

        let creature = factory.create_creature(9u32.into());
        assert_eq!(creature.name().as_str(), "Generic Creature");
        assert_eq!(creature.attack, 9);

        let spell = factory.create_spell(4u32.into());
        assert_eq!(spell.cost(), 4);

        let artifact = factory.create_artifact(7u32.into());
        assert_eq!(artifact.durability, 7);
        assert_eq!(factory.cards_created(), 3);
    }

    #[test]
    fn test_named_spell_and_artifact() {
        let mut factory = FantasyCardFactory::with_seed(11);
        let spell = factory.create_spell("Fireball".into());
        assert!(RANDOM_POWER_RANGE.contains(&spell.cost()));
        assert_eq!(spell.effect_type, EffectType::Damage);

        let ring = factory.create_artifact("Magic Ring".into());
        assert_eq!(ring.durability, 15);
        assert_eq!(ring.activate_ability(), "Permanent: damage");
    }

    #[test]
    fn test_themed_deck_drops_remainder() {
        let mut factory = FantasyCardFactory::default();
        let themed = factory.create_themed_deck(10);
        assert_eq!(themed.creatures.len(), 3);
        assert_eq!(themed.spells.len(), 3);
        assert_eq!(themed.artifacts.len(), 3);
        assert_eq!(themed.len(), 9);
        assert_eq!(factory.cards_created(), 9);

        assert!(factory.create_themed_deck(2).is_empty());
    }

    #[test]
    fn test_into_cards_order() {
        let mut factory = FantasyCardFactory::default();
        let kinds: Vec<CardKind> = factory
            .create_themed_deck(3)
            .into_cards()
            .iter()
            .map(|c| c.kind())
            .collect();
        assert_eq!(kinds, vec![CardKind::Creature, CardKind::Spell, CardKind::Artifact]);
    }

    #[test]
    fn test_build_deck() {
        let mut factory = FantasyCardFactory::with_seed(5);
        let deck = factory.build_deck(12, 99).unwrap();
        let stats = deck.get_stats().unwrap();
        assert_eq!(stats.total_cards, 12);
        assert_eq!((stats.creatures, stats.spells, stats.artifacts), (4, 4, 4));
    }

    #[test]
    fn test_seeded_factories_agree() {
        let mut a = FantasyCardFactory::with_seed(21);
        let mut b = FantasyCardFactory::with_seed(21);
        assert_eq!(a.create_themed_deck(9), b.create_themed_deck(9));
    }
}
