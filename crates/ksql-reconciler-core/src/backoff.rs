// crates/ksql-reconciler-core/src/backoff.rs
// ============================================================================
// Module: Backoff Schedule
// Description: Fixed retry schedule for statement submission.
// Purpose: Represent retry timing as configuration data so tests can
//          reproduce and replace it exactly.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The retry loop makes at most one submission per schedule entry and
//! sleeps for that entry's duration after every non-terminal attempt
//! except the last. The schedule is plain data rather than a formula.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Schedule
// ============================================================================

/// Default pause lengths between attempts, in seconds.
const DEFAULT_SECONDS: [u64; 6] = [1, 2, 4, 6, 8, 10];

/// Ordered sequence of inter-attempt pauses.
///
/// # Invariants
/// - The number of entries bounds the number of submission attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    /// Pause applied after each corresponding attempt.
    delays: Vec<Duration>,
}

impl BackoffSchedule {
    /// Builds a schedule from explicit delays.
    #[must_use]
    pub const fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays,
        }
    }

    /// Number of attempts the schedule allows.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.delays.len()
    }

    /// Iterates over the per-attempt delays.
    pub fn iter(&self) -> impl Iterator<Item = Duration> + '_ {
        self.delays.iter().copied()
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS.iter().copied().map(Duration::from_secs).collect())
    }
}
