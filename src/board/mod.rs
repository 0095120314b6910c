//! The board: a fixed number of lanes, each with three slots.
//!
//! Lanes are stored in an `im::Vector` so the whole board can be cloned in
//! O(1) when a host wants a snapshot to render from.
//!
//! ## Usage
//!
//! ```
//! use tooth_scale::board::{Board, Row};
//! use tooth_scale::cards::{CardId, Unit};
//! use tooth_scale::core::Side;
//!
//! let mut board = Board::new(4);
//! board.occupy(1, Row::Player, Unit::new(CardId::new(1), "Stoat", 1, 3, Side::Player)).unwrap();
//!
//! assert!(!board.is_empty(1, Row::Player).unwrap());
//! assert_eq!(board.empty_lanes(Row::Player), vec![0, 2, 3]);
//! ```

pub mod lane;

use im::Vector;
use serde::{Deserialize, Serialize};

pub use lane::{Lane, Row};

use crate::cards::Unit;
use crate::core::error::{EngineError, Result};

/// All lanes of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    lanes: Vector<Lane>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(lane_count: usize) -> Self {
        Self {
            lanes: (0..lane_count).map(|_| Lane::default()).collect(),
        }
    }

    /// Number of lanes.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Fail with `InvalidLaneIndex` unless `lane` is on the board.
    pub fn check_lane(&self, lane: usize) -> Result<()> {
        if lane < self.lanes.len() {
            Ok(())
        } else {
            Err(EngineError::InvalidLaneIndex {
                lane,
                lane_count: self.lanes.len(),
            })
        }
    }

    /// Borrow a lane.
    pub fn lane(&self, lane: usize) -> Result<&Lane> {
        self.check_lane(lane)?;
        Ok(&self.lanes[lane])
    }

    /// Iterate over lanes in ascending index order.
    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    /// Unit in a slot, if any.
    pub fn get(&self, lane: usize, row: Row) -> Result<Option<&Unit>> {
        Ok(self.lane(lane)?.slot(row))
    }

    /// Is the slot empty?
    pub fn is_empty(&self, lane: usize, row: Row) -> Result<bool> {
        Ok(self.lane(lane)?.is_empty(row))
    }

    /// Put a unit into an empty slot.
    pub fn occupy(&mut self, lane: usize, row: Row, unit: Unit) -> Result<()> {
        self.check_lane(lane)?;
        let slot = self.lanes[lane].slot_mut(row);
        if slot.is_some() {
            return Err(EngineError::SlotOccupied { lane, row });
        }
        *slot = Some(unit);
        Ok(())
    }

    /// Remove and return the unit in a slot.
    pub fn take(&mut self, lane: usize, row: Row) -> Result<Option<Unit>> {
        self.check_lane(lane)?;
        Ok(self.lanes[lane].slot_mut(row).take())
    }

    /// Mutably borrow the unit in a slot.
    pub fn unit_mut(&mut self, lane: usize, row: Row) -> Result<Option<&mut Unit>> {
        self.check_lane(lane)?;
        Ok(self.lanes[lane].slot_mut(row).as_mut())
    }

    /// Indices of lanes whose `row` slot is empty, ascending.
    #[must_use]
    pub fn empty_lanes(&self, row: Row) -> Vec<usize> {
        self.lanes
            .iter()
            .enumerate()
            .filter(|(_, lane)| lane.is_empty(row))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied slots in a row.
    #[must_use]
    pub fn count(&self, row: Row) -> usize {
        self.lanes.iter().filter(|lane| !lane.is_empty(row)).count()
    }
}
