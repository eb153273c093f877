//! Retry accounting for a single logical request.
//!
//! # Responsibilities
//! - Count rate-limit retries consumed by one call
//! - Enforce the retry ceiling (default 30, i.e. 31 attempts)
//!
//! # Design Decisions
//! - Only 429 responses are retried; every other status is final
//! - State is scoped to one call and never shared between calls
//! - The counter never exceeds the ceiling

/// Per-call retry counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryState {
    retries: u32,
    max_retries: u32,
}

impl RetryState {
    /// Start a fresh call with zero retries consumed.
    pub fn new(max_retries: u32) -> Self {
        Self {
            retries: 0,
            max_retries,
        }
    }

    /// Retries consumed so far.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Attempt number of the request about to be (or just) sent, 1-based.
    pub fn attempt(&self) -> u32 {
        self.retries + 1
    }

    /// Whether another attempt is allowed after the current one.
    pub fn can_retry(&self) -> bool {
        self.retries < self.max_retries
    }

    /// Consume one retry. Returns `false` once the budget is exhausted,
    /// leaving the counter at the ceiling.
    pub fn record_retry(&mut self) -> bool {
        if !self.can_retry() {
            return false;
        }
        self.retries += 1;
        true
    }
}
