// crates/ksql-reconciler-core/src/response.rs
// ============================================================================
// Module: Engine Response Classification
// Description: Normalizes the engine's polymorphic response shapes.
// Purpose: Reduce any decoded response body to one (error code, message)
//          pair, and model the introspection payload for running queries.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The engine answers most statement endpoints with an array of result
//! objects, but some endpoints return a bare object. Classification folds
//! both shapes into a single [`Outcome`]: an array uses its first element,
//! an empty array means success, and absent or wrongly-typed fields default
//! to "no error" rather than failing. Truly malformed payloads are the
//! transport layer's problem; [`classify`] itself never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Normalized engine verdict for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Engine error code; `0` means success.
    pub error_code: i64,
    /// Human-readable engine message, empty when absent.
    pub message: String,
}

impl Outcome {
    /// True when the engine reported no error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error_code == 0
    }
}

/// Normalizes a decoded response body into an [`Outcome`].
///
/// An array body is classified by its first element; an empty array is a
/// success. Field extraction tolerates absent or wrongly-typed fields by
/// defaulting them, so classification never fails on shape alone.
#[must_use]
pub fn classify(body: &Value) -> Outcome {
    let entry = match body {
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return Outcome::default(),
        },
        other => other,
    };
    Outcome {
        error_code: entry.get("error_code").and_then(Value::as_i64).unwrap_or(0),
        message: entry
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

// ============================================================================
// SECTION: Persistent Query Introspection
// ============================================================================

/// One running persistent query reported by `SHOW QUERIES;`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentQuery {
    /// Engine-assigned query identifier.
    #[serde(default)]
    pub id: String,
    /// Originating statement text.
    #[serde(default)]
    pub query_string: String,
    /// Names of the entities the query writes into.
    #[serde(default)]
    pub sinks: Vec<String>,
    /// Current lifecycle state, e.g. `RUNNING`.
    #[serde(default)]
    pub state: String,
}

/// One element of the `SHOW QUERIES;` response array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryListing {
    /// Persistent queries reported by this listing.
    #[serde(default)]
    pub queries: Vec<PersistentQuery>,
}
