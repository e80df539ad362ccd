// crates/ksql-reconciler-core/tests/backoff.rs
// ============================================================================
// Module: Backoff Schedule Tests
// Description: Validates the default retry schedule contents.
// ============================================================================
//! ## Overview
//! The default schedule is the fixed literal sequence 1, 2, 4, 6, 8, 10
//! seconds; its length bounds the attempt count.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::time::Duration;

use ksql_reconciler_core::BackoffSchedule;

#[test]
fn default_schedule_is_the_fixed_literal_sequence() {
    let schedule = BackoffSchedule::default();
    let delays: Vec<Duration> = schedule.iter().collect();
    assert_eq!(delays, vec![
        Duration::from_secs(1),
        Duration::from_secs(2),
        Duration::from_secs(4),
        Duration::from_secs(6),
        Duration::from_secs(8),
        Duration::from_secs(10),
    ]);
}

#[test]
fn default_schedule_allows_six_attempts() {
    assert_eq!(BackoffSchedule::default().attempts(), 6);
}

#[test]
fn explicit_delays_are_preserved_in_order() {
    let schedule =
        BackoffSchedule::new(vec![Duration::from_millis(5), Duration::from_millis(50)]);
    assert_eq!(schedule.attempts(), 2);
    let delays: Vec<Duration> = schedule.iter().collect();
    assert_eq!(delays, vec![Duration::from_millis(5), Duration::from_millis(50)]);
}
