//! Structured results returned by engine operations.
//!
//! A presentation layer animates these in the order they are returned.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Row;
use crate::cards::Unit;
use crate::core::Side;

/// Result of a single lane's attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The defender took lethal damage and left its slot.
    UnitKilled { attacker: Side, lane: usize, unit: Unit },
    /// The defender survived with `health` left.
    UnitDamaged { attacker: Side, lane: usize, unit: Unit, health: u32 },
    /// Nothing stood in the way; `amount` went onto the scale.
    DirectDamage { attacker: Side, lane: usize, amount: u32 },
}

impl AttackOutcome {
    /// Lane the outcome happened in.
    #[must_use]
    pub fn lane(&self) -> usize {
        match self {
            AttackOutcome::UnitKilled { lane, .. }
            | AttackOutcome::UnitDamaged { lane, .. }
            | AttackOutcome::DirectDamage { lane, .. } => *lane,
        }
    }

    /// Side that attacked.
    #[must_use]
    pub fn attacker(&self) -> Side {
        match self {
            AttackOutcome::UnitKilled { attacker, .. }
            | AttackOutcome::UnitDamaged { attacker, .. }
            | AttackOutcome::DirectDamage { attacker, .. } => *attacker,
        }
    }
}

/// Outcomes of one attack phase, in lane order.
pub type AttackOutcomes = SmallVec<[AttackOutcome; 4]>;

/// A queued AI unit that stepped into the active row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    pub lane: usize,
    pub unit: Unit,
}

/// A unit the AI put on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub lane: usize,
    pub row: Row,
    pub unit: Unit,
}

/// Match result after a tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[default]
    Ongoing,
    Won(Side),
}

impl MatchOutcome {
    /// Winner, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchOutcome::Ongoing => None,
            MatchOutcome::Won(side) => Some(side),
        }
    }
}

/// Everything that happened when the player ended a turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player_attacks: Vec<AttackOutcome>,
    pub advanced: Vec<Advance>,
    pub ai_attacks: Vec<AttackOutcome>,
    pub scale_value: i64,
    pub outcome: MatchOutcome,
    pub spawned: Vec<Spawn>,
}

/// One step of a turn, flattened for a sequential presentation queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    Attack(AttackOutcome),
    Advanced(Advance),
    ScaleTilted { value: i64 },
    Resolved { winner: Side },
    Spawned(Spawn),
}

impl TurnReport {
    /// All steps in the order they must be presented.
    #[must_use]
    pub fn events(&self) -> Vec<MatchEvent> {
        let mut events: Vec<MatchEvent> = self
            .player_attacks
            .iter()
            .cloned()
            .map(MatchEvent::Attack)
            .chain(self.advanced.iter().cloned().map(MatchEvent::Advanced))
            .chain(self.ai_attacks.iter().cloned().map(MatchEvent::Attack))
            .collect();

        events.push(MatchEvent::ScaleTilted { value: self.scale_value });
        if let MatchOutcome::Won(winner) = self.outcome {
            events.push(MatchEvent::Resolved { winner });
        }
        events.extend(self.spawned.iter().cloned().map(MatchEvent::Spawned));
        events
    }
}
