//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card a match can put on the board,
//! whether it arrives from the player's table or from the AI deck.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::error::{EngineError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use tooth_scale::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Stoat", 1, 3)).unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Stoat");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions.
    pub fn from_cards(cards: impl IntoIterator<Item = CardDefinition>) -> Result<Self> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Rejects duplicate IDs and cards that would spawn dead.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::InvalidConfig(format!("{} registered twice", card.id)));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition, failing with `UnknownCard`.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition> {
        self.get(id).ok_or(EngineError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
