//! Tournament platform: registration, matches, ratings and leaderboards
//!
//! The platform owns every registered tournament card for its whole lifetime.
//! Matches are decided by a coin flip from the platform's seeded RNG; the
//! winner gains [`WIN_BONUS`] rating and the loser drops [`LOSS_PENALTY`].
//! Every match is appended to an immutable history.

use crate::core::{CardId, Playable, Ranked, TournamentCard, LOSS_PENALTY, WIN_BONUS};
use crate::game::{GameLogger, VerbosityLevel};
use crate::{DeckError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Range of the numeric suffix appended to a card name to form its id
pub const ID_SUFFIX_RANGE: RangeInclusive<u32> = 1000..=9999;

/// Suffix rolls tried before falling back to a sequence-qualified id
const MAX_ID_ATTEMPTS: usize = 16;

/// Capabilities every registered card exposes
const TOURNAMENT_INTERFACES: [&str; 3] = ["Card", "Combatant", "Ranked"];

/// Outcome of one match, with both ratings as they stood right after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub winner: CardId,
    pub loser: CardId,
    pub winner_rating: i64,
    pub loser_rating: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub id: CardId,
    pub name: String,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
}

/// Standings, best rating first, plus the full match history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub standings: Vec<LeaderboardEntry>,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub total_cards: usize,
    pub matches_played: usize,
    pub avg_rating: f64,
    pub platform_status: String,
}

/// Platform view of a single registered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: CardId,
    pub name: String,
    pub interfaces: Vec<String>,
    pub rating: i64,
    /// "wins-losses"
    pub record: String,
}

#[derive(Debug)]
pub struct TournamentPlatform {
    cards: FxHashMap<CardId, TournamentCard>,
    /// Ids in registration order; breaks rating ties on the leaderboard
    registration_order: Vec<CardId>,
    matches: Vec<Match>,
    rng: ChaCha12Rng,
    pub logger: GameLogger,
}

impl TournamentPlatform {
    pub fn with_seed(seed: u64) -> Self {
        TournamentPlatform {
            cards: FxHashMap::default(),
            registration_order: Vec::new(),
            matches: Vec::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
            logger: GameLogger::new(),
        }
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger.set_verbosity(verbosity);
        self
    }

    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Take ownership of `card` and return the id it is registered under.
    ///
    /// Ids are `<name>_<suffix>` with a random suffix. A suffix that is already
    /// taken is re-rolled, so an existing registration is never replaced.
    pub fn register_card(&mut self, card: TournamentCard) -> CardId {
        let id = self.fresh_id(&card);
        self.logger.event(
            "registration",
            &format!("Registered {} (rating {})", id, card.calculate_rating()),
        );
        self.cards.insert(id.clone(), card);
        self.registration_order.push(id.clone());
        id
    }

    fn fresh_id(&mut self, card: &TournamentCard) -> CardId {
        let mut suffix = 0;
        for _ in 0..MAX_ID_ATTEMPTS {
            suffix = self.rng.gen_range(ID_SUFFIX_RANGE);
            let id = CardId::from_parts(card.name(), suffix);
            if !self.cards.contains_key(&id) {
                return id;
            }
            self.logger.verbose(&format!("Id {id} already taken, re-rolling"));
        }
        // Qualify with a counter, skipping ids an oddly named card already holds
        let mut qualifier = self.registration_order.len();
        loop {
            let id = CardId::new(format!("{}_{}_{}", card.name(), suffix, qualifier));
            if !self.cards.contains_key(&id) {
                return id;
            }
            qualifier += 1;
        }
    }

    pub fn get_card(&self, id: &CardId) -> Option<&TournamentCard> {
        self.cards.get(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Registered ids in registration order
    pub fn card_ids(&self) -> &[CardId] {
        &self.registration_order
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Stage a match between two registered cards and record the result
    pub fn create_match(&mut self, first: &CardId, second: &CardId) -> Result<Match> {
        if first == second {
            return Err(DeckError::InvalidMatch(format!("{first} cannot play itself")));
        }
        for id in [first, second] {
            if !self.cards.contains_key(id) {
                return Err(DeckError::CardNotFound(id.to_string()));
            }
        }

        let (winner, loser) = if self.rng.gen_bool(0.5) {
            (first, second)
        } else {
            (second, first)
        };

        let winner_rating = self.apply_result(winner, true)?;
        let loser_rating = self.apply_result(loser, false)?;

        let result = Match {
            winner: winner.clone(),
            loser: loser.clone(),
            winner_rating,
            loser_rating,
        };
        self.logger.event(
            "match",
            &format!(
                "{} defeats {} ({} / {})",
                result.winner, result.loser, winner_rating, loser_rating
            ),
        );
        self.matches.push(result.clone());
        Ok(result)
    }

    /// Record a win or loss and return the card's new rating
    fn apply_result(&mut self, id: &CardId, won: bool) -> Result<i64> {
        let card = self
            .cards
            .get_mut(id)
            .ok_or_else(|| DeckError::CardNotFound(id.to_string()))?;
        let before = card.calculate_rating();
        if won {
            card.update_wins(1);
        } else {
            card.update_losses(1);
        }
        let after = card.calculate_rating();
        self.logger.verbose(&format!("{id}: rating {before} -> {after}"));
        Ok(after)
    }

    /// Play every registered card against every other once per round, in
    /// registration order
    pub fn run_round_robin(&mut self, rounds: usize) -> Result<Vec<Match>> {
        let ids = self.registration_order.clone();
        let mut played = Vec::new();
        for _ in 0..rounds {
            for (i, first) in ids.iter().enumerate() {
                for second in &ids[i + 1..] {
                    played.push(self.create_match(first, second)?);
                }
            }
        }
        Ok(played)
    }

    /// Standings sorted by rating, highest first; ties keep registration order
    pub fn get_leaderboard(&self) -> Leaderboard {
        let mut ranked: Vec<(&CardId, &TournamentCard)> = self
            .registration_order
            .iter()
            .filter_map(|id| self.cards.get(id).map(|card| (id, card)))
            .collect();
        ranked.sort_by_key(|(_, card)| std::cmp::Reverse(card.calculate_rating()));

        let standings: Vec<LeaderboardEntry> = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (id, card))| LeaderboardEntry {
                rank: i + 1,
                id: id.clone(),
                name: card.name().to_string(),
                rating: card.calculate_rating(),
                wins: card.wins(),
                losses: card.losses(),
            })
            .collect();

        self.logger.minimal("Tournament Leaderboard:");
        for entry in &standings {
            self.logger.minimal(&format!(
                "{}. {} - Rating: {} ({}-{})",
                entry.rank, entry.name, entry.rating, entry.wins, entry.losses
            ));
        }

        Leaderboard {
            standings,
            matches: self.matches.clone(),
        }
    }

    pub fn generate_tournament_report(&self) -> Result<TournamentReport> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyCollection("tournament report"));
        }

        let total_rating: i64 = self
            .cards
            .values()
            .map(|card| card.calculate_rating())
            .sum();
        Ok(TournamentReport {
            total_cards: self.cards.len(),
            matches_played: self.matches.len(),
            avg_rating: total_rating as f64 / self.cards.len() as f64,
            platform_status: "active".to_string(),
        })
    }

    pub fn card_info(&self, id: &CardId) -> Result<CardSummary> {
        let card = self
            .cards
            .get(id)
            .ok_or_else(|| DeckError::CardNotFound(id.to_string()))?;
        Ok(CardSummary {
            id: id.clone(),
            name: card.name().to_string(),
            interfaces: TOURNAMENT_INTERFACES.iter().map(|s| s.to_string()).collect(),
            rating: card.calculate_rating(),
            record: format!("{}-{}", card.wins(), card.losses()),
        })
    }
}

impl Default for TournamentPlatform {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
