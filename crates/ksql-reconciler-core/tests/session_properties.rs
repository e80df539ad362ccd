// crates/ksql-reconciler-core/tests/session_properties.rs
// ============================================================================
// Module: Session Property Tests
// Description: Validates property merging precedence and body sanitization.
// ============================================================================
//! ## Overview
//! Request-local properties override provider defaults, inline statement
//! clauses override both, and sanitized bodies never retain a SET segment.

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

use ksql_reconciler_core::OperationKind;
use ksql_reconciler_core::QueryRequest;
use ksql_reconciler_core::RequestOptions;
use ksql_reconciler_core::ResourceType;
use ksql_reconciler_core::SessionProperties;
use proptest::prelude::*;

#[test]
fn merge_is_last_wins() {
    let defaults =
        SessionProperties::from_pairs([("auto.offset.reset", "latest"), ("cache.max", "0")]);
    let local = SessionProperties::from_pairs([("auto.offset.reset", "earliest")]);
    let merged = defaults.merge(&local);
    assert_eq!(merged.get("auto.offset.reset"), Some("earliest"));
    assert_eq!(merged.get("cache.max"), Some("0"));
}

#[test]
fn statement_clauses_override_merged_defaults() {
    let defaults = SessionProperties::from_pairs([("auto.offset.reset", "latest")]);
    let req = QueryRequest::new(
        "orders",
        OperationKind::Create,
        ResourceType::Stream,
        "SET 'auto.offset.reset'='earliest';CREATE STREAM orders AS SELECT * FROM raw",
        &defaults,
        RequestOptions::default(),
    );
    assert_eq!(req.properties().get("auto.offset.reset"), Some("earliest"));
}

#[test]
fn repeated_statement_clauses_are_last_wins() {
    let req = QueryRequest::new(
        "orders",
        OperationKind::Create,
        ResourceType::Stream,
        "SET 'k'='first';SET 'k'='second';CREATE STREAM orders AS SELECT * FROM raw",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert_eq!(req.properties().get("k"), Some("second"));
}

#[test]
fn empty_properties_produce_empty_preamble() {
    assert_eq!(SessionProperties::new().to_preamble(), "");
}

#[test]
fn preamble_is_one_clause_per_entry() {
    let properties = SessionProperties::from_pairs([("a", "1"), ("b", "2")]);
    assert_eq!(properties.to_preamble(), "SET 'a'='1';SET 'b'='2';");
}

proptest! {
    #[test]
    fn sanitized_bodies_never_retain_set_segments(
        keys in prop::collection::vec("[a-z.]{1,12}", 0..4),
        tail in "[A-Za-z0-9 *,()]{0,40}",
    ) {
        let mut body = String::new();
        for key in &keys {
            body.push_str(&format!("SET '{key}'='v';"));
        }
        body.push_str(&tail);

        let req = QueryRequest::new(
            "orders",
            OperationKind::Create,
            ResourceType::Stream,
            &body,
            &SessionProperties::new(),
            RequestOptions::default(),
        );
        for segment in req.body().split(';') {
            prop_assert!(!segment.trim_start().starts_with("SET"));
        }
        for key in &keys {
            prop_assert_eq!(req.properties().get(key), Some("v"));
        }
    }
}
