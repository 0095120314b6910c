//! A single combat lane and its three slots.

use serde::{Deserialize, Serialize};

use crate::cards::Unit;
use crate::core::Side;

/// Slot row within a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// The player's active row.
    Player,
    /// The AI's active row, facing the player.
    Ai,
    /// The AI's staging row behind its active row.
    AiQueue,
}

impl Row {
    /// All rows, nearest to the player first.
    pub const ALL: [Row; 3] = [Row::Player, Row::Ai, Row::AiQueue];

    /// The active (fighting) row of a side.
    #[must_use]
    pub const fn active(side: Side) -> Row {
        match side {
            Side::Player => Row::Player,
            Side::Ai => Row::Ai,
        }
    }
}

/// One vertical column of the board.
///
/// Each slot holds at most one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lane {
    pub player: Option<Unit>,
    pub ai: Option<Unit>,
    pub ai_queue: Option<Unit>,
}

impl Lane {
    /// Borrow a slot.
    #[must_use]
    pub fn slot(&self, row: Row) -> Option<&Unit> {
        match row {
            Row::Player => self.player.as_ref(),
            Row::Ai => self.ai.as_ref(),
            Row::AiQueue => self.ai_queue.as_ref(),
        }
    }

    /// Mutably borrow a slot's contents.
    pub fn slot_mut(&mut self, row: Row) -> &mut Option<Unit> {
        match row {
            Row::Player => &mut self.player,
            Row::Ai => &mut self.ai,
            Row::AiQueue => &mut self.ai_queue,
        }
    }

    /// Is the slot empty?
    #[must_use]
    pub fn is_empty(&self, row: Row) -> bool {
        self.slot(row).is_none()
    }

    /// Units in this lane, in row order.
    pub fn units(&self) -> impl Iterator<Item = (Row, &Unit)> {
        Row::ALL
            .into_iter()
            .filter_map(move |row| self.slot(row).map(|unit| (row, unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn unit(owner: Side) -> Unit {
        Unit::new(CardId::new(1), "Stoat", 1, 3, owner)
    }

    #[test]
    fn test_active_rows() {
        assert_eq!(Row::active(Side::Player), Row::Player);
        assert_eq!(Row::active(Side::Ai), Row::Ai);
    }

    #[test]
    fn test_slot_access() {
        let mut lane = Lane::default();
        assert!(lane.is_empty(Row::AiQueue));

        *lane.slot_mut(Row::AiQueue) = Some(unit(Side::Ai));
        assert!(!lane.is_empty(Row::AiQueue));
        assert!(lane.is_empty(Row::Ai));
        assert_eq!(lane.slot(Row::AiQueue).map(|u| u.owner), Some(Side::Ai));
    }

    #[test]
    fn test_units_in_row_order() {
        let lane = Lane {
            player: Some(unit(Side::Player)),
            ai: None,
            ai_queue: Some(unit(Side::Ai)),
        };
        let rows: Vec<_> = lane.units().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![Row::Player, Row::AiQueue]);
    }
}
