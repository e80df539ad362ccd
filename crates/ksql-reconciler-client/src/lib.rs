// crates/ksql-reconciler-client/src/lib.rs
// ============================================================================
// Module: ksql-reconciler Client Library
// Description: HTTP transport, recovery side-effects, and the retry loop.
// Purpose: Execute reconciliation requests against a live engine endpoint.
// Dependencies: ksql-reconciler-core, reqwest, serde_json, log, thiserror, url
// ============================================================================

//! ## Overview
//! The client crate wires the core decision logic to a real engine: a
//! blocking HTTP transport with Basic-auth credential rotation, the
//! dependency resolver that discovers and terminates blocking persistent
//! queries, the bounded retry executor, and a facade that merges
//! provider-wide session properties into each request.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod endpoint;
pub mod executor;
pub mod resolver;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ReconcilerClient;
pub use endpoint::EndpointConfig;
pub use executor::ExecuteError;
pub use executor::RetryExecutor;
pub use resolver::terminate_dependencies_of;
pub use transport::HttpTransport;
