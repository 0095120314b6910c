//! Match configuration.
//!
//! Hosts configure a match at startup with a `MatchConfig`. The defaults
//! reproduce the tabletop rules: four lanes, a five-tooth win margin and an
//! AI that stages one and a half cards per turn.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Default number of lanes on the board.
pub const DEFAULT_LANE_COUNT: usize = 4;

/// Default lead in side damage that wins a match.
pub const DEFAULT_WIN_THRESHOLD: i64 = 5;

/// Default hand budget the AI spends per turn.
pub const DEFAULT_AI_SPAWN_RATE: f64 = 1.5;

/// Random lane draws the AI makes before giving up on a spawn.
pub const DEFAULT_MAX_QUEUE_ATTEMPTS: u32 = 11;

/// Upper bound on lane draws per spawn.
pub const MAX_QUEUE_ATTEMPTS_LIMIT: u32 = 1024;

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use tooth_scale::core::MatchConfig;
///
/// let config = MatchConfig::default()
///     .with_lane_count(5)
///     .with_win_threshold(7)
///     .with_ai_max_hand(6.0)
///     .with_seed(99);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.lane_count, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of parallel lanes (at least 1).
    pub lane_count: usize,

    /// A side wins once its direct damage leads by this much.
    pub win_threshold: i64,

    /// AI units placed in the active row before the first turn.
    pub starting_cards: usize,

    /// AI units placed in the queue row before the first turn.
    pub starting_queued_cards: usize,

    /// Hand budget the AI starts with; spawning stops when it runs out.
    pub ai_max_hand: f64,

    /// Hand budget consumed per AI turn.
    pub ai_spawn_rate: f64,

    /// Random lane draws per spawn before the AI gives up for the turn.
    pub max_queue_attempts: u32,

    /// RNG seed.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            lane_count: DEFAULT_LANE_COUNT,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            starting_cards: 0,
            starting_queued_cards: 0,
            ai_max_hand: 0.0,
            ai_spawn_rate: DEFAULT_AI_SPAWN_RATE,
            max_queue_attempts: DEFAULT_MAX_QUEUE_ATTEMPTS,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Set the number of lanes.
    #[must_use]
    pub fn with_lane_count(mut self, lanes: usize) -> Self {
        self.lane_count = lanes;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: i64) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the opening layout of the AI.
    #[must_use]
    pub fn with_starting_cards(mut self, active: usize, queued: usize) -> Self {
        self.starting_cards = active;
        self.starting_queued_cards = queued;
        self
    }

    /// Set the AI hand budget.
    #[must_use]
    pub fn with_ai_max_hand(mut self, max_hand: f64) -> Self {
        self.ai_max_hand = max_hand;
        self
    }

    /// Set the per-turn AI spawn rate.
    #[must_use]
    pub fn with_ai_spawn_rate(mut self, rate: f64) -> Self {
        self.ai_spawn_rate = rate;
        self
    }

    /// Set the number of lane draws per spawn attempt.
    #[must_use]
    pub fn with_max_queue_attempts(mut self, attempts: u32) -> Self {
        self.max_queue_attempts = attempts;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.lane_count == 0 {
            return Err(EngineError::InvalidConfig("lane_count must be at least 1".into()));
        }
        if self.win_threshold <= 0 {
            return Err(EngineError::InvalidConfig("win_threshold must be positive".into()));
        }
        if self.starting_cards > self.lane_count || self.starting_queued_cards > self.lane_count {
            return Err(EngineError::InvalidConfig(format!(
                "starting cards ({} active, {} queued) exceed lane count {}",
                self.starting_cards, self.starting_queued_cards, self.lane_count
            )));
        }
        if !self.ai_max_hand.is_finite() || self.ai_max_hand < 0.0 {
            return Err(EngineError::InvalidConfig(
                "ai_max_hand must be finite and non-negative".into(),
            ));
        }
        check_spawn_rate(self.ai_spawn_rate)?;
        check_queue_attempts(self.max_queue_attempts)
    }
}

pub(crate) fn check_spawn_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(EngineError::InvalidConfig(format!(
            "ai_spawn_rate must be finite and non-negative, got {}",
            rate
        )));
    }
    Ok(())
}

pub(crate) fn check_queue_attempts(attempts: u32) -> Result<()> {
    if attempts > MAX_QUEUE_ATTEMPTS_LIMIT {
        return Err(EngineError::InvalidConfig(format!(
            "max_queue_attempts must be at most {}, got {}",
            MAX_QUEUE_ATTEMPTS_LIMIT, attempts
        )));
    }
    Ok(())
}
