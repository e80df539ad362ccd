// crates/ksql-reconciler-client/src/resolver.rs
// ============================================================================
// Module: Dependency Resolver
// Description: Discovers and terminates persistent queries blocking a drop.
// Purpose: Unblock statements that fail because a running derived query
//          still reads from or writes to the target entity.
// Dependencies: ksql-reconciler-core, serde_json, log
// ============================================================================

//! ## Overview
//! When a statement fails because a persistent query depends on the target,
//! the resolver asks the engine for all running queries, collects the
//! identifiers of those whose sink list names the target (case-insensitive),
//! and terminates them with a single statement. Finding nothing to
//! terminate is not an error; the blocking query may already have finished.

// ============================================================================
// SECTION: Imports
// ============================================================================

use ksql_reconciler_core::QueryListing;
use ksql_reconciler_core::StatementTransport;
use ksql_reconciler_core::TransportError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Introspection statement listing all running persistent queries.
const SHOW_QUERIES: &str = "SHOW QUERIES;";

// ============================================================================
// SECTION: Dependency Termination
// ============================================================================

/// Terminates every running persistent query whose sink list contains
/// `name` under case-insensitive comparison.
///
/// A no-op when no running query writes into `name`.
///
/// # Errors
///
/// Returns [`TransportError`] when the introspection or termination call
/// fails at the transport level.
pub fn terminate_dependencies_of<T: StatementTransport>(
    transport: &T,
    name: &str,
) -> Result<(), TransportError> {
    let body = transport.execute(SHOW_QUERIES)?;
    let listings: Vec<QueryListing> = serde_json::from_value(body).unwrap_or_default();

    let target = name.to_lowercase();
    let mut ids: Vec<String> = Vec::new();
    for listing in &listings {
        for query in &listing.queries {
            if query.sinks.iter().any(|sink| sink.to_lowercase() == target) {
                ids.push(query.id.clone());
            }
        }
    }

    if ids.is_empty() {
        log::debug!("no running queries write into [{name}], nothing to terminate");
        return Ok(());
    }

    let statement = format!("TERMINATE {} ;", ids.join(", "));
    log::debug!("terminating dependent queries: {statement}");
    transport.execute(&statement)?;
    Ok(())
}
