//! Turn engine: match state and the operations that advance it.
//!
//! - `MatchState`: board, side damage, scale, phase
//! - `TurnEngine`: placement, attack resolution, queue advance, tally
//! - `spawn`: AI opening layout and per-turn queue spawns
//! - `outcome`: structured results for the presentation layer

pub mod state;
pub mod outcome;
pub mod turn;
pub mod spawn;

pub use state::{MatchState, Phase};
pub use outcome::{
    Advance, AttackOutcome, AttackOutcomes, MatchEvent, MatchOutcome, Spawn, TurnReport,
};
pub use turn::TurnEngine;
pub use spawn::spawn_count;
