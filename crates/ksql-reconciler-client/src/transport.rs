// crates/ksql-reconciler-client/src/transport.rs
// ============================================================================
// Module: HTTP Transport Adapter
// Description: Blocking HTTP implementation of the statement transport.
// Purpose: POST statements to `{base_url}/ksql` with Basic auth and decode
//          the JSON body.
// Dependencies: ksql-reconciler-core, reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! `HttpTransport` submits one statement per call: a JSON body of the form
//! `{"ksql": "<statement>"}` posted with Basic authentication. Non-2xx
//! statuses and undecodable bodies are transport errors, distinct from the
//! engine-reported error codes that classification interprets. Credentials
//! and base URL are snapshotted from a shared [`EndpointConfig`] at the
//! start of each orchestration call, so rotation between calls never races
//! an in-flight submission.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::time::Duration;

use ksql_reconciler_core::StatementTransport;
use ksql_reconciler_core::TransportError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use serde_json::Value;
use serde_json::json;
use url::Url;

use crate::endpoint::EndpointConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Full request lifecycle timeout for one submission.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Statement endpoint path under the engine base URL.
const KSQL_PATH: &str = "/ksql";

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Blocking HTTP statement transport.
pub struct HttpTransport {
    /// Shared HTTP client and connection pool.
    client: Client,
    /// Shared endpoint configuration, rotated between calls.
    config: Mutex<EndpointConfig>,
}

impl HttpTransport {
    /// Builds a transport for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: EndpointConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| TransportError::Http(err.to_string()))?;
        Ok(Self {
            client,
            config: Mutex::new(config),
        })
    }

    /// Replaces any non-empty argument in the shared endpoint
    /// configuration, leaving the others unchanged.
    pub fn rotate_credentials(&self, url: &str, username: &str, password: &str) {
        let mut guard = match self.config.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = guard.rotated(url, username, password);
    }

    /// Takes an immutable snapshot of the current endpoint configuration.
    #[must_use]
    pub fn snapshot(&self) -> EndpointConfig {
        match self.config.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Submits a statement using an explicit configuration snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection failure, non-2xx status,
    /// or an undecodable body.
    pub fn execute_with(
        &self,
        config: &EndpointConfig,
        statement: &str,
    ) -> Result<Value, TransportError> {
        let endpoint = Url::parse(&format!("{}{KSQL_PATH}", config.url))
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
        let payload = json!({ "ksql": statement }).to_string();

        let response = self
            .client
            .post(endpoint)
            .basic_auth(&config.username, Some(&config.password))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(|err| TransportError::Http(err.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|err| TransportError::Http(err.to_string()))?;
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| TransportError::Decode {
            body,
            source_message: err.to_string(),
        })
    }
}

impl StatementTransport for HttpTransport {
    fn execute(&self, statement: &str) -> Result<Value, TransportError> {
        let config = self.snapshot();
        self.execute_with(&config, statement)
    }
}
