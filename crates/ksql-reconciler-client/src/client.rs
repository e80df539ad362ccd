// crates/ksql-reconciler-client/src/client.rs
// ============================================================================
// Module: Reconciler Client Facade
// Description: Entry point tying transport, executor, and defaults together.
// Purpose: Build requests with provider-wide session properties and run
//          them through the retry loop.
// Dependencies: ksql-reconciler-core
// ============================================================================

//! ## Overview
//! `ReconcilerClient` is what a declarative caller holds: it owns the HTTP
//! transport, the retry executor, and the provider-wide default session
//! properties. Request-local properties override the defaults on key
//! collision, and inline `SET` clauses in the statement body override both.

// ============================================================================
// SECTION: Imports
// ============================================================================

use ksql_reconciler_core::BackoffSchedule;
use ksql_reconciler_core::OperationKind;
use ksql_reconciler_core::QueryRequest;
use ksql_reconciler_core::RequestOptions;
use ksql_reconciler_core::ResourceType;
use ksql_reconciler_core::SessionProperties;
use ksql_reconciler_core::TransportError;

use crate::endpoint::EndpointConfig;
use crate::executor::ExecuteError;
use crate::executor::RetryExecutor;
use crate::transport::HttpTransport;

// ============================================================================
// SECTION: Reconciler Client
// ============================================================================

/// Client facade for declarative reconciliation calls.
pub struct ReconcilerClient {
    /// Blocking HTTP transport to the engine.
    transport: HttpTransport,
    /// Bounded retry loop.
    executor: RetryExecutor,
    /// Provider-wide default session properties.
    defaults: SessionProperties,
}

impl ReconcilerClient {
    /// Builds a client for the given endpoint with the default backoff
    /// schedule and no provider-wide properties.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: EndpointConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            executor: RetryExecutor::default(),
            defaults: SessionProperties::new(),
        })
    }

    /// Replaces the provider-wide default session properties.
    #[must_use]
    pub fn with_default_properties(mut self, defaults: SessionProperties) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the retry schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: BackoffSchedule) -> Self {
        self.executor = RetryExecutor::new(schedule);
        self
    }

    /// Builds a request, merging provider-wide defaults with the
    /// request-local properties; request-local values win on collision.
    #[must_use]
    pub fn request(
        &self,
        name: &str,
        operation: OperationKind,
        resource_type: ResourceType,
        body: &str,
        properties: &SessionProperties,
        options: RequestOptions,
    ) -> QueryRequest {
        let merged = self.defaults.merge(properties);
        QueryRequest::new(name, operation, resource_type, body, &merged, options)
    }

    /// Runs a request to completion and returns the identifier the caller
    /// persists as its record of the applied operation.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] with the last recorded failure after the
    /// retry budget is exhausted.
    pub fn submit(&self, request: &QueryRequest) -> Result<String, ExecuteError> {
        self.executor.execute(&self.transport, request)
    }

    /// Replaces any non-empty credential argument, leaving others
    /// unchanged. Rotate only between orchestration calls.
    pub fn rotate_credentials(&self, url: &str, username: &str, password: &str) {
        self.transport.rotate_credentials(url, username, password);
    }
}
