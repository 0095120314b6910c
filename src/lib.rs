//! # tooth-scale
//!
//! A deterministic turn engine for a lane-based card duel decided on a
//! balance scale.
//!
//! The player places creature cards into the lanes of a board; the AI stages
//! creatures in a queue row behind its active row. When the player ends a
//! turn, every lane fights. Damage that finds no defender goes onto the
//! scale as teeth, and the first side to lead by the win threshold takes
//! the match.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: no rendering, audio, timing or input
//!    tracking. Operations return structured outcomes a host animates.
//!
//! 2. **Explicit ownership**: one `Match` per game, passed to whoever needs
//!    it. No globals, no runtime lookup.
//!
//! 3. **Deterministic**: a seed plus the command history reproduces a match.
//!
//! ## Modules
//!
//! - `core`: sides, configuration, commands, RNG, errors
//! - `cards`: card definitions, registry, AI deck, live units
//! - `board`: lanes and slots
//! - `engine`: match state and the turn engine
//! - `session`: the `Match` context and observer hooks
//!
//! ## Example
//!
//! ```
//! use tooth_scale::prelude::*;
//!
//! let registry = CardRegistry::from_cards([
//!     CardDefinition::new(CardId::new(1), "Stoat", 1, 3),
//!     CardDefinition::new(CardId::new(2), "Wolf", 3, 2),
//! ])
//! .unwrap();
//! let deck = AiDeck::new(vec![CardId::new(1)]).unwrap();
//! let config = MatchConfig::default().with_starting_cards(1, 0).with_seed(7);
//!
//! let mut game = Match::new(config, registry, deck).unwrap();
//! game.begin().unwrap();
//! game.place_card(0, CardId::new(2)).unwrap();
//!
//! let report = game.end_player_turn().unwrap();
//! assert_eq!(report.outcome, MatchOutcome::Ongoing);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord, EngineError, GameRng, GameRngState, MatchConfig, Result, Side, SideMap,
};

pub use crate::cards::{AiDeck, CardDefinition, CardId, CardRegistry, Unit, UnitId};

pub use crate::board::{Board, Lane, Row};

pub use crate::engine::{
    Advance, AttackOutcome, AttackOutcomes, MatchEvent, MatchOutcome, MatchState, Phase, Spawn,
    TurnEngine, TurnReport,
};

pub use crate::session::{CommandResult, Match, MatchObserver, NullObserver};

/// Everything a host usually needs.
pub mod prelude {
    pub use crate::board::Row;
    pub use crate::cards::{AiDeck, CardDefinition, CardId, CardRegistry, Unit};
    pub use crate::core::{Command, EngineError, MatchConfig, Side};
    pub use crate::engine::{AttackOutcome, MatchEvent, MatchOutcome, Phase, TurnReport};
    pub use crate::session::{Match, MatchObserver};
}
