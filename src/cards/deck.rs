//! The AI deck: the ordered list of cards the AI may spawn.
//!
//! The first card is the AI's signature creature; every opening unit in the
//! active row is a copy of it. Queued and per-turn spawns draw uniformly from
//! the whole list (duplicates weight the draw).

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::error::{EngineError, Result};
use crate::core::GameRng;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardId>", into = "Vec<CardId>")]
pub struct AiDeck {
    cards: Vec<CardId>,
}

impl TryFrom<Vec<CardId>> for AiDeck {
    type Error = EngineError;

    fn try_from(cards: Vec<CardId>) -> Result<Self> {
        Self::new(cards)
    }
}

impl From<AiDeck> for Vec<CardId> {
    fn from(deck: AiDeck) -> Self {
        deck.cards
    }
}

impl AiDeck {
    /// Create a deck. An empty deck cannot spawn anything.
    pub fn new(cards: Vec<CardId>) -> Result<Self> {
        if cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        Ok(Self { cards })
    }

    /// The card used for opening units in the active row.
    #[must_use]
    pub fn lead(&self) -> CardId {
        self.cards[0]
    }

    /// Draw a uniformly random card.
    pub fn draw(&self, rng: &mut GameRng) -> CardId {
        rng.choose(&self.cards).copied().unwrap_or(self.cards[0])
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
