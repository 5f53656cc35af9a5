//! DataDeck - trading card game simulation library
//!
//! Cards with composable capabilities, decks, factory-built hands driven by
//! pluggable strategies, and a rating-based tournament platform. Everything is
//! single-threaded and every source of randomness is a seeded RNG owned by the
//! component that uses it.

pub mod core;
pub mod deck;
pub mod error;
pub mod game;
pub mod tournament;

pub use error::{DeckError, Result};
