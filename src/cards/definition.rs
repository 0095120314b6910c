//! Card definitions - static creature data.
//!
//! `CardDefinition` holds what is printed on a card: its name, attack and
//! starting health. A `Unit` is a live copy of a definition on the board.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tooth_scale::cards::{CardDefinition, CardId};
///
/// let wolf = CardDefinition::new(CardId::new(1), "Wolf", 3, 2);
/// assert_eq!(wolf.attack, 3);
/// assert!(wolf.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Damage dealt to the opposing unit, or to the scale, each attack.
    pub attack: u32,

    /// Health a freshly spawned unit starts with.
    pub base_health: u32,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, attack: u32, base_health: u32) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            base_health,
        }
    }

    /// A card must start alive.
    pub fn validate(&self) -> Result<()> {
        if self.base_health == 0 {
            return Err(EngineError::InvalidUnit(format!(
                "{} ({}) has zero base health",
                self.name, self.id
            )));
        }
        Ok(())
    }
}
