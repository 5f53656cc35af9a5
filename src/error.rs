//! Error types for DataDeck

use crate::core::CardKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Unsupported card type: {0}")]
    UnsupportedCardType(CardKind),

    #[error("Invalid card attributes: {0}")]
    InvalidAttributes(String),

    #[error("Cannot draw from an empty deck")]
    EmptyDeck,

    #[error("No cards to compute {0} over")]
    EmptyCollection(&'static str),

    #[error("Engine not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Invalid match: {0}")]
    InvalidMatch(String),
}

impl DeckError {
    /// Whether the error reports an operation over zero cards: an empty draw
    /// or statistics and reports with nothing to aggregate
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, DeckError::EmptyDeck | DeckError::EmptyCollection(_))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
