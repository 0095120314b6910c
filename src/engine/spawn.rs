//! AI spawning: the opening layout and per-turn queue spawns.
//!
//! The AI carries a fractional hand budget. Each turn it spends
//! `spawn_rate` of it, and the number of units it stages is how many whole
//! numbers that spend crosses:
//!
//! ```text
//! spawn_count = floor(budget) - floor(budget - spawn_rate)
//! ```
//!
//! With a rate of 1.5 a budget of 4.0 stages 2 units, 2.5 stages 1 and
//! 1.0 stages 2.

use log::{debug, warn};

use super::outcome::Spawn;
use super::state::Phase;
use super::turn::TurnEngine;
use crate::board::Row;
use crate::cards::CardId;
use crate::core::config::{check_queue_attempts, check_spawn_rate};
use crate::core::error::Result;
use crate::core::Side;

/// Units the AI stages for a given budget and rate.
///
/// This is the bare formula. `schedule_ai_spawns` skips the turn entirely
/// once the budget has dropped below one card.
#[must_use]
pub fn spawn_count(budget: f64, spawn_rate: f64) -> u32 {
    let count = budget.floor() - (budget - spawn_rate).floor();
    count.max(0.0) as u32
}

impl TurnEngine {
    /// Place the AI opening layout. Setup only.
    ///
    /// `starting_cards` copies of the deck's lead card go into random empty
    /// AI slots, then `starting_queued_cards` random deck cards go into
    /// random empty queue slots.
    pub fn spawn_opening(&mut self) -> Result<Vec<Spawn>> {
        self.require_phase(&[Phase::Setup], "Setup")?;

        let mut spawned = Vec::new();
        for _ in 0..self.config.starting_cards {
            let card = self.deck.lead();
            match self.spawn_into_random_lane(Row::Ai, card)? {
                Some(spawn) => spawned.push(spawn),
                None => break,
            }
        }
        for _ in 0..self.config.starting_queued_cards {
            let card = self.deck.draw(&mut self.rng);
            match self.spawn_into_random_lane(Row::AiQueue, card)? {
                Some(spawn) => spawned.push(spawn),
                None => break,
            }
        }

        Ok(spawned)
    }

    fn spawn_into_random_lane(&mut self, row: Row, card: CardId) -> Result<Option<Spawn>> {
        let empty = self.state.board.empty_lanes(row);
        let Some(&lane) = self.rng.choose(&empty) else {
            return Ok(None);
        };
        self.spawn(lane, row, card).map(Some)
    }

    fn spawn(&mut self, lane: usize, row: Row, card: CardId) -> Result<Spawn> {
        let mut unit = self.unit_from_card(card, Side::Ai)?;
        unit.id = self.state.alloc_unit();
        self.state.board.occupy(lane, row, unit.clone())?;
        debug!("AI spawned {} {} in lane {} ({:?})", unit.id, unit.name, lane, row);
        Ok(Spawn { lane, row, unit })
    }

    /// Stage this turn's AI units in random empty queue slots.
    ///
    /// Each spawn draws random lanes until it finds an empty queue slot. If
    /// `max_queue_attempts` draws all hit occupied slots, spawning stops for
    /// this call and `hand` is left untouched; otherwise `hand` is reduced by
    /// `spawn_rate`. A full queue row gives up without drawing.
    ///
    /// A negative or non-finite `spawn_rate`, or more than
    /// [`MAX_QUEUE_ATTEMPTS_LIMIT`](crate::core::config::MAX_QUEUE_ATTEMPTS_LIMIT)
    /// attempts, fails with `InvalidConfig` before anything changes.
    pub fn schedule_ai_spawns(
        &mut self,
        hand: &mut f64,
        spawn_rate: f64,
        max_queue_attempts: u32,
    ) -> Result<Vec<Spawn>> {
        self.require_phase(&[Phase::PlayerTurn, Phase::AiTurn], "PlayerTurn or AiTurn")?;
        check_spawn_rate(spawn_rate)?;
        check_queue_attempts(max_queue_attempts)?;

        if *hand < 1.0 {
            return Ok(Vec::new());
        }
        let count = spawn_count(*hand, spawn_rate);

        let lane_count = self.state.board.lane_count();
        let mut spawned = Vec::new();

        for _ in 0..count {
            let lane = if self.state.board.count(Row::AiQueue) == lane_count {
                None
            } else {
                (0..max_queue_attempts)
                    .map(|_| self.rng.lane(lane_count))
                    .find(|&lane| {
                        matches!(self.state.board.is_empty(lane, Row::AiQueue), Ok(true))
                    })
            };

            let Some(lane) = lane else {
                warn!(
                    "AI gave up spawning after {} draws with {} of {} planned units staged",
                    max_queue_attempts,
                    spawned.len(),
                    count
                );
                return Ok(spawned);
            };

            let card = self.deck.draw(&mut self.rng);
            spawned.push(self.spawn(lane, Row::AiQueue, card)?);
        }

        *hand -= spawn_rate;
        Ok(spawned)
    }
}
