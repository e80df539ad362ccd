// crates/ksql-reconciler-core/src/transport.rs
// ============================================================================
// Module: Transport Interface
// Description: Backend-agnostic statement submission seam.
// Purpose: Keep the retry loop independent of any HTTP implementation.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The transport submits one statement and hands back the decoded JSON
//! body. Transport failures (network, non-2xx status, decode) are distinct
//! from engine-reported errors, which arrive as ordinary decoded bodies and
//! are interpreted by classification.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Transport Errors
// ============================================================================

/// Transport-level submission errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint URL could not be parsed or joined.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    /// Request could not be sent or the connection failed.
    #[error("http request failed: {0}")]
    Http(String),
    /// Engine answered with a non-success HTTP status.
    #[error("invalid response status code [{code}], body [{body}]")]
    Status {
        /// HTTP status code returned by the engine.
        code: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },
    /// Response body was not decodable JSON.
    #[error("failed to unmarshal: {body}, err: {source_message}")]
    Decode {
        /// Raw response body that failed to decode.
        body: String,
        /// Decoder error text.
        source_message: String,
    },
}

// ============================================================================
// SECTION: Statement Transport
// ============================================================================

/// Backend-agnostic statement submission.
pub trait StatementTransport {
    /// Submits one statement and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be delivered,
    /// the engine answers with a non-2xx status, or the body fails to
    /// decode as JSON.
    fn execute(&self, statement: &str) -> Result<Value, TransportError>;
}
