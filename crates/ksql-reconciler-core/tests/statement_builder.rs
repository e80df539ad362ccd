// crates/ksql-reconciler-core/tests/statement_builder.rs
// ============================================================================
// Module: Statement Builder Tests
// Description: Validates statement text generation per operation kind.
// ============================================================================
//! ## Overview
//! Covers create preambles, delete clause shapes, read no-ops, and
//! SET-clause sanitization of statement bodies.

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
use ksql_reconciler_core::statement_for;

fn request(
    operation: OperationKind,
    body: &str,
    properties: &SessionProperties,
    options: RequestOptions,
) -> QueryRequest {
    QueryRequest::new("orders", operation, ResourceType::Stream, body, properties, options)
}

#[test]
fn read_emits_empty_statement() {
    let req = request(
        OperationKind::Read,
        "CREATE STREAM orders AS SELECT * FROM raw",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert_eq!(statement_for(&req), "");
}

#[test]
fn create_prepends_property_preamble() {
    let properties =
        SessionProperties::from_pairs([("auto.offset.reset", "earliest"), ("processing", "exact")]);
    let req = request(
        OperationKind::Create,
        "CREATE STREAM orders AS SELECT * FROM raw",
        &properties,
        RequestOptions::default(),
    );
    assert_eq!(
        statement_for(&req),
        "SET 'auto.offset.reset'='earliest';SET 'processing'='exact';\
         CREATE STREAM orders AS SELECT * FROM raw"
    );
}

#[test]
fn create_without_properties_is_bare_body() {
    let req = request(
        OperationKind::Create,
        "CREATE STREAM orders AS SELECT * FROM raw",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert_eq!(statement_for(&req), "CREATE STREAM orders AS SELECT * FROM raw");
}

#[test]
fn delete_uses_if_exists() {
    let req = request(
        OperationKind::Delete,
        "",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert_eq!(statement_for(&req), "DROP STREAM IF EXISTS orders ;");
}

#[test]
fn delete_table_with_topic_removal() {
    let options = RequestOptions {
        delete_topic_on_destroy: true,
        ..RequestOptions::default()
    };
    let req = QueryRequest::new(
        "orders_by_user",
        OperationKind::Delete,
        ResourceType::Table,
        "",
        &SessionProperties::new(),
        options,
    );
    assert_eq!(statement_for(&req), "DROP TABLE IF EXISTS orders_by_user DELETE TOPIC ;");
}

#[test]
fn set_clauses_are_stripped_from_body() {
    let req = request(
        OperationKind::Create,
        "SET 'auto.offset.reset'='earliest';CREATE STREAM orders AS SELECT * FROM raw",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert!(!req.body().contains("SET"));
    let statement = statement_for(&req);
    // The stripped clause survives only as the preamble entry.
    assert_eq!(
        statement,
        "SET 'auto.offset.reset'='earliest';CREATE STREAM orders AS SELECT * FROM raw"
    );
}

#[test]
fn result_identifier_combines_type_and_name() {
    let req = request(
        OperationKind::Create,
        "CREATE STREAM orders AS SELECT * FROM raw",
        &SessionProperties::new(),
        RequestOptions::default(),
    );
    assert_eq!(req.id(), "stream_orders");
}
