//! Units - live creatures on the board.
//!
//! A `Unit` is spawned from a `CardDefinition` and tracks the state that
//! changes during combat. Attack is fixed at spawn; health only goes down
//! and never below zero.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::Side;

/// Match-unique unit identifier, assigned by the engine when a unit enters
/// the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A creature occupying a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Engine-assigned identifier.
    pub id: UnitId,

    /// Definition this unit was spawned from.
    pub card: CardId,

    /// Display name copied from the definition.
    pub name: String,

    /// Attack points.
    pub attack: u32,

    /// Current health. Zero means dead.
    pub health: u32,

    /// Side that controls the unit.
    pub owner: Side,

    /// Number of blow exchanges this unit has taken part in.
    pub clashes: u32,
}

impl Unit {
    /// Create a unit with explicit stats. The id is assigned on placement.
    #[must_use]
    pub fn new(
        card: CardId,
        name: impl Into<String>,
        attack: u32,
        health: u32,
        owner: Side,
    ) -> Self {
        Self {
            id: UnitId::default(),
            card,
            name: name.into(),
            attack,
            health,
            owner,
            clashes: 0,
        }
    }

    /// Spawn a fresh unit from a card definition.
    #[must_use]
    pub fn from_definition(def: &CardDefinition, owner: Side) -> Self {
        Self::new(def.id, def.name.clone(), def.attack, def.base_health, owner)
    }

    /// Is this unit still alive?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, clamping health at zero.
    ///
    /// Returns `true` if the blow was lethal.
    pub fn receive_attack(&mut self, damage: u32) -> bool {
        self.health = self.health.saturating_sub(damage);
        self.health == 0
    }
}
