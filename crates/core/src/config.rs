//! Session configuration
//!
//! Defaults match the classic layout: 5 upcoming pieces, 3 reserve slots and
//! 100 undo snapshots. Values can be overridden from the environment:
//!
//! - `TETRIS_STACK_QUEUE`: next queue capacity (default: 5)
//! - `TETRIS_STACK_HOLD`: reserve capacity (default: 3)
//! - `TETRIS_STACK_HISTORY`: undo snapshots kept (default: 100)
//! - `TETRIS_STACK_HISTORY_MODE`: `saturate` (default) or `evict`
//! - `TETRIS_STACK_SEED`: fixed RNG seed (default: derived from the clock)
//!
//! Unparsable values fall back to the default.

use std::env;

use crate::error::SessionError;
use crate::history::HistoryOverflow;
use crate::rng::time_seed;
use crate::types::{HISTORY_CAPACITY, QUEUE_CAPACITY, STACK_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub history_capacity: usize,
    pub history_overflow: HistoryOverflow,
    /// Fixed seed; `None` reseeds from the clock on every start
    pub seed: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            queue_capacity: QUEUE_CAPACITY,
            stack_capacity: STACK_CAPACITY,
            history_capacity: HISTORY_CAPACITY,
            history_overflow: HistoryOverflow::Saturate,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Default layout with a fixed seed
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let queue_capacity = parse_var("TETRIS_STACK_QUEUE").unwrap_or(defaults.queue_capacity);
        let stack_capacity = parse_var("TETRIS_STACK_HOLD").unwrap_or(defaults.stack_capacity);
        let history_capacity =
            parse_var("TETRIS_STACK_HISTORY").unwrap_or(defaults.history_capacity);
        let history_overflow = env::var("TETRIS_STACK_HISTORY_MODE")
            .ok()
            .and_then(|s| HistoryOverflow::from_str(&s))
            .unwrap_or(defaults.history_overflow);
        let seed = parse_var("TETRIS_STACK_SEED");

        Self {
            queue_capacity,
            stack_capacity,
            history_capacity,
            history_overflow,
            seed,
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        for (what, value) in [
            ("queue", self.queue_capacity),
            ("reserve", self.stack_capacity),
            ("history", self.history_capacity),
        ] {
            if value == 0 {
                return Err(SessionError::InvalidCapacity { what, value });
            }
        }
        Ok(())
    }

    /// Configured seed, or a fresh clock-derived one
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}
