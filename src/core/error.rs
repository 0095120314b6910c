//! Engine error types.
//!
//! Every error is a synchronous validation failure. An operation that
//! returns `Err` has left the match state untouched.

use thiserror::Error;

use crate::board::Row;
use crate::cards::CardId;
use crate::engine::Phase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("slot {row:?} in lane {lane} is already occupied")]
    SlotOccupied { lane: usize, row: Row },

    #[error("operation not allowed in phase {actual:?} (expected {expected})")]
    InvalidPhase { expected: &'static str, actual: Phase },

    #[error("match has ended")]
    MatchEnded,

    #[error("lane {lane} out of range (lane count {lane_count})")]
    InvalidLaneIndex { lane: usize, lane_count: usize },

    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("card not found: {0}")]
    UnknownCard(CardId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("AI deck is empty")]
    EmptyDeck,

    #[error("codec error: {0}")]
    Codec(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
