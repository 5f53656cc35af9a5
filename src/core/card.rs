//! Card identity, the play contract, and the closed set of card variants

use crate::core::{
    ArtifactCard, Caster, CardName, Combatant, CreatureCard, EliteCard, GameState, Ranked, Rarity,
    SpellCard, TournamentCard,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Effect text returned when a card cannot be paid for
pub const NOT_ENOUGH_MANA: &str = "Not enough mana";

/// Discriminator for the card variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Creature,
    Spell,
    Artifact,
    Elite,
    Tournament,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Creature => "Creature",
            CardKind::Spell => "Spell",
            CardKind::Artifact => "Artifact",
            CardKind::Elite => "Elite",
            CardKind::Tournament => "Tournament",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, cost and rarity shared by every card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdentity {
    pub name: CardName,
    /// Mana cost
    pub cost: u32,
    pub rarity: Rarity,
}

impl CardIdentity {
    pub fn new(name: impl Into<CardName>, cost: u32, rarity: Rarity) -> Self {
        CardIdentity {
            name: name.into(),
            cost,
            rarity,
        }
    }
}

/// Outcome of playing a card
///
/// `card_played` is `None` when the card could not be paid for; in that case
/// `mana_used` is zero and the game state was not touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    pub card_played: Option<CardName>,
    pub mana_used: u32,
    pub effect: String,
}

impl PlayResult {
    pub fn insufficient_mana() -> Self {
        PlayResult {
            card_played: None,
            mana_used: 0,
            effect: NOT_ENOUGH_MANA.to_string(),
        }
    }

    pub fn was_played(&self) -> bool {
        self.card_played.is_some()
    }
}

/// Introspection snapshot of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub name: CardName,
    pub cost: u32,
    pub rarity: Rarity,
    pub card_type: CardKind,
    /// Variant-specific attributes as (label, value) pairs
    pub attributes: SmallVec<[(String, String); 4]>,
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, cost {}, {})",
            self.name, self.card_type, self.cost, self.rarity
        )?;
        for (label, value) in &self.attributes {
            write!(f, " {label}={value}")?;
        }
        Ok(())
    }
}

/// Capability shared by every card: it can be paid for and played
pub trait Playable {
    fn identity(&self) -> &CardIdentity;

    fn kind(&self) -> CardKind;

    /// Pay the card's cost out of `state` and resolve it.
    ///
    /// Implementations must leave `state` untouched and return
    /// [`PlayResult::insufficient_mana`] when `state.mana < cost`.
    fn play(&self, state: &mut GameState) -> PlayResult;

    fn card_info(&self) -> CardInfo;

    fn name(&self) -> &CardName {
        &self.identity().name
    }

    fn cost(&self) -> u32 {
        self.identity().cost
    }

    fn rarity(&self) -> Rarity {
        self.identity().rarity
    }

    fn is_playable(&self, available_mana: u32) -> bool {
        available_mana >= self.cost()
    }
}

/// Shared payment path for every variant's `play`
pub(crate) fn pay_and_resolve(
    identity: &CardIdentity,
    state: &mut GameState,
    resolve: impl FnOnce() -> String,
) -> PlayResult {
    if !state.spend_mana(identity.cost) {
        return PlayResult::insufficient_mana();
    }

    let effect = resolve();
    state.record_effect(effect.clone());
    PlayResult {
        card_played: Some(identity.name.clone()),
        mana_used: identity.cost,
        effect,
    }
}

pub(crate) fn base_info(
    identity: &CardIdentity,
    card_type: CardKind,
    attributes: impl IntoIterator<Item = (&'static str, String)>,
) -> CardInfo {
    CardInfo {
        name: identity.name.clone(),
        cost: identity.cost,
        rarity: identity.rarity,
        card_type,
        attributes: attributes
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .collect(),
    }
}

/// Any card in the game
///
/// Decks, hands and factories deal in this closed set; capability access goes
/// through `as_combatant`, `as_caster_mut` and `as_ranked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Card {
    Creature(CreatureCard),
    Spell(SpellCard),
    Artifact(ArtifactCard),
    Elite(EliteCard),
    Tournament(TournamentCard),
}

impl Card {
    fn as_playable(&self) -> &dyn Playable {
        match self {
            Card::Creature(c) => c,
            Card::Spell(c) => c,
            Card::Artifact(c) => c,
            Card::Elite(c) => c,
            Card::Tournament(c) => c,
        }
    }

    pub fn as_combatant(&self) -> Option<&dyn Combatant> {
        match self {
            Card::Creature(c) => Some(c),
            Card::Elite(c) => Some(c),
            Card::Tournament(c) => Some(c),
            Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    pub fn as_caster_mut(&mut self) -> Option<&mut dyn Caster> {
        match self {
            Card::Elite(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ranked(&self) -> Option<&dyn Ranked> {
        match self {
            Card::Tournament(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_combatant(&self) -> bool {
        self.as_combatant().is_some()
    }
}

impl Playable for Card {
    fn identity(&self) -> &CardIdentity {
        self.as_playable().identity()
    }

    fn kind(&self) -> CardKind {
        self.as_playable().kind()
    }

    fn play(&self, state: &mut GameState) -> PlayResult {
        self.as_playable().play(state)
    }

    fn card_info(&self) -> CardInfo {
        self.as_playable().card_info()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.kind())
    }
}

impl From<CreatureCard> for Card {
    fn from(card: CreatureCard) -> Self {
        Card::Creature(card)
    }
}

impl From<SpellCard> for Card {
    fn from(card: SpellCard) -> Self {
        Card::Spell(card)
    }
}

impl From<ArtifactCard> for Card {
    fn from(card: ArtifactCard) -> Self {
        Card::Artifact(card)
    }
}

impl From<EliteCard> for Card {
    fn from(card: EliteCard) -> Self {
        Card::Elite(card)
    }
}

impl From<TournamentCard> for Card {
    fn from(card: TournamentCard) -> Self {
        Card::Tournament(card)
    }
}
