//! Core engine types: sides, configuration, commands, RNG, errors.

pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use action::{Command, CommandRecord, decode_log, encode_log};
pub use error::{EngineError, Result};
