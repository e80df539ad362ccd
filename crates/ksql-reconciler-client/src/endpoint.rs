// crates/ksql-reconciler-client/src/endpoint.rs
// ============================================================================
// Module: Endpoint Configuration
// Description: Engine base URL and Basic-auth credentials.
// Purpose: Provide immutable per-call snapshots with non-destructive
//          credential rotation between calls.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Endpoint configuration is shared mutable state only between
//! orchestration calls: each call takes an immutable snapshot at entry, so
//! a rotation never changes the credentials of an in-flight retry loop.
//! Rotation replaces only the arguments that are non-empty.

// ============================================================================
// SECTION: Endpoint Config
// ============================================================================

/// Engine endpoint location and credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Base URL of the engine, without the `/ksql` path.
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl EndpointConfig {
    /// Creates a configuration from explicit values.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a copy with every non-empty argument replaced.
    #[must_use]
    pub fn rotated(&self, url: &str, username: &str, password: &str) -> Self {
        Self {
            url: if url.is_empty() { self.url.clone() } else { url.to_string() },
            username: if username.is_empty() {
                self.username.clone()
            } else {
                username.to_string()
            },
            password: if password.is_empty() {
                self.password.clone()
            } else {
                password.to_string()
            },
        }
    }
}
