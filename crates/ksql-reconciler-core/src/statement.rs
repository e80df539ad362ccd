// crates/ksql-reconciler-core/src/statement.rs
// ============================================================================
// Module: Statement Builder
// Description: Materializes the statement text submitted for a request.
// Purpose: Produce create/delete statement text with property preamble and
//          defensive deletion clauses.
// Dependencies: crate::request
// ============================================================================

//! ## Overview
//! Statement generation is a pure transformation from a [`QueryRequest`] to
//! the exact text posted to the engine. Create statements are prefixed with
//! the session-property preamble; delete statements are generated wholesale
//! with `IF EXISTS` and optional `DELETE TOPIC` clauses; read operations
//! produce the empty string and never reach the network.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::request::OperationKind;
use crate::request::QueryRequest;

// ============================================================================
// SECTION: Statement Generation
// ============================================================================

/// Builds the statement text for a request.
#[must_use]
pub fn statement_for(request: &QueryRequest) -> String {
    match request.operation() {
        OperationKind::Create => create_statement(request),
        OperationKind::Delete => delete_statement(request),
        OperationKind::Read => String::new(),
    }
}

/// Property preamble followed by the sanitized statement body.
fn create_statement(request: &QueryRequest) -> String {
    let mut statement = request.properties().to_preamble();
    statement.push_str(request.body());
    statement
}

/// `DROP <TYPE> IF EXISTS <name>[ DELETE TOPIC] ;`
fn delete_statement(request: &QueryRequest) -> String {
    let mut statement = String::from("DROP ");
    statement.push_str(request.resource_type().keyword());
    statement.push_str(" IF EXISTS ");
    statement.push_str(request.name());
    if request.options().delete_topic_on_destroy {
        statement.push_str(" DELETE TOPIC");
    }
    statement.push_str(" ;");
    statement
}
