// crates/ksql-reconciler-core/src/lib.rs
// ============================================================================
// Module: ksql-reconciler Core Library
// Description: Domain types and decision logic for statement reconciliation.
// Purpose: Expose the request model, statement builder, response
//          classification, recovery matching, and transport interface.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! ksql-reconciler core holds everything about a reconciliation call that
//! does not touch the network: the immutable request model, statement text
//! generation, normalization of the engine's polymorphic response shapes,
//! the recovery-pattern matching that drives dependency termination, and
//! the backoff schedule. Transport is reached only through the
//! [`StatementTransport`] interface so the retry loop stays testable
//! without an engine.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod backoff;
pub mod recovery;
pub mod request;
pub mod response;
pub mod statement;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use backoff::BackoffSchedule;
pub use recovery::embedded_terminate_targets;
pub use recovery::is_already_exists;
pub use recovery::is_dependency_blocked;
pub use request::OperationKind;
pub use request::QueryRequest;
pub use request::RequestOptions;
pub use request::ResourceType;
pub use request::SessionProperties;
pub use response::Outcome;
pub use response::PersistentQuery;
pub use response::QueryListing;
pub use response::classify;
pub use statement::statement_for;
pub use transport::StatementTransport;
pub use transport::TransportError;
