//! Host commands and the command history.
//!
//! Hosts that gather input from several sources (marker tracking, a UI
//! button, a network peer) funnel it through `Command` values so that only
//! one mutation is ever in flight. Every applied command is recorded with
//! its turn and sequence number; replaying the log against a match built
//! from the same configuration reproduces it exactly.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::CardId;

/// A single host request against a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Spawn the AI opening layout and hand the first turn to the player.
    Begin,
    /// Place a player card from the catalogue into a lane.
    PlaceCard { lane: usize, card: CardId },
    /// The player rings the bell: resolve the whole AI turn.
    EndTurn,
}

/// A recorded command with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,

    /// Turn number when the command was applied.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            command,
            turn,
            sequence,
        }
    }
}

/// Encode a command history into a compact binary blob.
pub fn encode_log(log: &[CommandRecord]) -> Result<Vec<u8>> {
    bincode::serialize(log).map_err(|e| EngineError::Codec(e.to_string()))
}

/// Decode a command history produced by [`encode_log`].
pub fn decode_log(bytes: &[u8]) -> Result<Vec<CommandRecord>> {
    bincode::deserialize(bytes).map_err(|e| EngineError::Codec(e.to_string()))
}
