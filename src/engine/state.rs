//! Match state: the board plus the scale.
//!
//! ## MatchState
//!
//! Everything a presentation layer needs to draw the table:
//! - Board contents (three slots per lane)
//! - Cumulative direct damage per side and the derived scale value
//! - Turn phase and number
//! - Final outcome once resolved
//!
//! Only `TurnEngine` mutates a `MatchState`. Hosts read it through
//! `TurnEngine::state` or take an owned snapshot, which is cheap because the
//! board is a persistent vector.

use serde::{Deserialize, Serialize};

use super::outcome::MatchOutcome;
use crate::board::Board;
use crate::cards::UnitId;
use crate::core::{Side, SideMap};

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first turn. Tutorial placements and the AI opening happen here.
    #[default]
    Setup,
    /// The player may place cards.
    PlayerTurn,
    /// Combat, queue advance and tally are resolved.
    AiTurn,
    /// Terminal. Nothing may change any more.
    Resolved,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Lane contents.
    pub board: Board,

    /// Direct damage dealt by each side. Never decreases.
    pub side_damage: SideMap<i64>,

    /// `side_damage[Ai] - side_damage[Player]`, clamped to the threshold.
    pub scale_value: i64,

    /// Current phase.
    pub phase: Phase,

    /// Lead in side damage that ends the match.
    pub win_threshold: i64,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// `Won` once the match is resolved.
    pub outcome: MatchOutcome,

    next_unit_id: u32,
}

impl MatchState {
    /// Create the Setup state for a new match. The threshold comes from a
    /// validated `MatchConfig`.
    #[must_use]
    pub(crate) fn new(lane_count: usize, win_threshold: i64) -> Self {
        Self {
            board: Board::new(lane_count),
            side_damage: SideMap::with_value(0),
            scale_value: 0,
            phase: Phase::Setup,
            win_threshold,
            turn_number: 1,
            outcome: MatchOutcome::Ongoing,
            next_unit_id: 0,
        }
    }

    /// Has the match ended?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Scale value for the current side damage, clamped to `±win_threshold`.
    ///
    /// A non-positive threshold (only reachable through a hand-edited
    /// snapshot) pins the scale at 0.
    #[must_use]
    pub fn compute_scale(&self) -> i64 {
        let raw = self.side_damage[Side::Ai] - self.side_damage[Side::Player];
        let limit = self.win_threshold.max(0);
        raw.clamp(-limit, limit)
    }

    /// Allocate the next unit id.
    pub(crate) fn alloc_unit(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = MatchState::new(4, 5);
        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.board.lane_count(), 4);
        assert_eq!(state.side_damage.as_array(), &[0, 0]);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.outcome, MatchOutcome::Ongoing);
        assert!(!state.is_resolved());
    }

    #[test]
    fn test_scale_clamps() {
        let mut state = MatchState::new(4, 5);
        state.side_damage[Side::Ai] = 9;
        assert_eq!(state.compute_scale(), 5);

        state.side_damage[Side::Player] = 20;
        assert_eq!(state.compute_scale(), -5);

        state.side_damage[Side::Player] = 7;
        assert_eq!(state.compute_scale(), 2);
    }

    #[test]
    fn test_scale_with_negative_threshold_from_snapshot() {
        let mut json = serde_json::to_value(MatchState::new(2, 5)).unwrap();
        json["win_threshold"] = serde_json::json!(-3);
        json["side_damage"] = serde_json::json!({ "data": [1, 4] });
        let state: MatchState = serde_json::from_value(json).unwrap();
        assert_eq!(state.compute_scale(), 0);
    }

    #[test]
    fn test_unit_ids_are_unique() {
        let mut state = MatchState::new(1, 1);
        let a = state.alloc_unit();
        let b = state.alloc_unit();
        assert_ne!(a, b);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchState::new(3, 5);
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
