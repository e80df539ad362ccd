// crates/ksql-reconciler-core/src/request.rs
// ============================================================================
// Module: Query Request Model
// Description: Immutable request value and session-property handling.
// Purpose: Capture one reconciliation operation with sanitized statement
//          text and fully merged session properties.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`QueryRequest`] describes a single create/delete/read operation
//! against a named stream or table. Construction folds any inline
//! `SET 'k'='v';` clauses out of the statement body and into the merged
//! session-property set, so the body never carries a property-setting
//! clause afterward. The request is immutable for the duration of the
//! retry loop; only the derived statement text is ever mutated between
//! attempts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Operation Kind
// ============================================================================

/// Logical operation performed by a reconciliation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Create the target entity.
    Create,
    /// Drop the target entity.
    Delete,
    /// Read-only no-op; performs no network call.
    Read,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Delete => f.write_str("delete"),
            Self::Read => f.write_str("read"),
        }
    }
}

// ============================================================================
// SECTION: Resource Type
// ============================================================================

/// Kind of named entity the statement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A continuously updated stream.
    Stream,
    /// A materialized table.
    Table,
}

impl ResourceType {
    /// Keyword form used inside generated statements.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Stream => "STREAM",
            Self::Table => "TABLE",
        }
    }

    /// Lowercase form used inside result identifiers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ============================================================================
// SECTION: Session Properties
// ============================================================================

/// Session-level engine settings applied via `SET` clauses.
///
/// # Invariants
/// - Keys are held in a [`BTreeMap`], so preamble generation is
///   deterministic regardless of insertion order.
/// - Merging is last-wins on key collision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProperties {
    /// Property name to value entries.
    entries: BTreeMap<String, String>,
}

impl SessionProperties {
    /// Creates an empty property set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a property set from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            entries,
        }
    }

    /// Returns true when no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a property value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Merges `other` into this set; `other` wins on key collision.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in &other.entries {
            entries.insert(key.clone(), value.clone());
        }
        Self {
            entries,
        }
    }

    /// Merges every inline `SET 'k'='v'` clause found in `body` into this
    /// set. Statement clauses win over existing entries, last clause wins
    /// on repeated keys.
    #[must_use]
    pub fn merged_with_statement(&self, body: &str) -> Self {
        let mut entries = self.entries.clone();
        for segment in body.split(';') {
            let Some((key, value)) = parse_set_clause(segment) else {
                continue;
            };
            entries.insert(key, value);
        }
        Self {
            entries,
        }
    }

    /// Serializes the set as a statement preamble, one `SET 'k'='v';`
    /// clause per entry; empty string when there are no entries.
    #[must_use]
    pub fn to_preamble(&self) -> String {
        let mut preamble = String::new();
        for (key, value) in &self.entries {
            preamble.push_str(&format!("SET '{key}'='{value}';"));
        }
        preamble
    }
}

/// Parses one `;`-split statement segment as a `SET 'k'='v'` clause.
///
/// Returns `None` when the segment is not a property-setting clause or is
/// too malformed to carry a key/value pair.
fn parse_set_clause(segment: &str) -> Option<(String, String)> {
    let trimmed = segment.trim_start();
    let rest = trimmed.strip_prefix("SET ")?;
    let (key, value) = rest.split_once('=')?;
    let key = key.trim().trim_matches('\'');
    let value = value.trim().trim_matches('\'');
    Some((key.to_string(), value.to_string()))
}

// ============================================================================
// SECTION: Query Request
// ============================================================================

/// Behavioral switches carried by a [`QueryRequest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Treat an "already exists" failure as success.
    pub ignore_already_exists: bool,
    /// Drop the backing topic together with the entity on delete.
    pub delete_topic_on_destroy: bool,
    /// Terminate dependent persistent queries on any failure, not only on
    /// recognized dependency error patterns.
    pub terminate_persistent_query: bool,
}

/// One immutable submission request.
///
/// # Invariants
/// - `body` contains no `SET`-prefixed segment; any such clause from the
///   original statement has been folded into `properties`.
/// - The request never changes during the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Identifier of the target stream or table.
    name: String,
    /// Logical operation to perform.
    operation: OperationKind,
    /// Kind of the target entity.
    resource_type: ResourceType,
    /// Sanitized statement body.
    body: String,
    /// Fully merged session properties.
    properties: SessionProperties,
    /// Behavioral switches.
    options: RequestOptions,
}

impl QueryRequest {
    /// Builds a request, sanitizing the statement body and folding its
    /// inline `SET` clauses into `properties` (clause values win).
    pub fn new(
        name: impl Into<String>,
        operation: OperationKind,
        resource_type: ResourceType,
        body: &str,
        properties: &SessionProperties,
        options: RequestOptions,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            resource_type,
            body: sanitize_body(body),
            properties: properties.merged_with_statement(body),
            options,
        }
    }

    /// Identifier persisted by the caller when the operation succeeds.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}_{}", self.resource_type.label(), self.name)
    }

    /// Target entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical operation.
    #[must_use]
    pub const fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Target entity kind.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Sanitized statement body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Merged session properties.
    #[must_use]
    pub const fn properties(&self) -> &SessionProperties {
        &self.properties
    }

    /// Behavioral switches.
    #[must_use]
    pub const fn options(&self) -> RequestOptions {
        self.options
    }
}

/// Removes every `SET`-prefixed segment from a `;`-split statement body and
/// rejoins the remaining segments with a single space.
fn sanitize_body(body: &str) -> String {
    let kept: Vec<&str> = body
        .split(';')
        .filter(|segment| !segment.trim_start().starts_with("SET"))
        .collect();
    kept.join(" ")
}
