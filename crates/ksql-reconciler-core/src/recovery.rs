// crates/ksql-reconciler-core/src/recovery.rs
// ============================================================================
// Module: Recovery Pattern Matching
// Description: Recognizes recoverable failures in engine error prose.
// Purpose: Decide when a failure is an idempotent-create duplicate, a
//          blocking-dependency error, or carries an embedded terminate list.
// Dependencies: crate::request
// ============================================================================

//! ## Overview
//! The engine reports recoverable conditions only as prose, so recovery
//! decisions are substring matches against its canonical phrasings. All
//! recognized phrases live in this module; the retry loop never inspects
//! message text itself, which keeps the matching rules replaceable if the
//! engine ever grows structured error codes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::request::QueryRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Engine phrasing for a duplicate entity on create.
const ALREADY_EXISTS: &str = "already exists";
/// Engine phrasing when a running query pins the target's schema.
const UPGRADES_UNSUPPORTED: &str = "Upgrades not yet supported";
/// Engine phrasing when a running query blocks a drop.
const CANNOT_DROP: &str = "Cannot drop";
/// Prefix of the error line that enumerates blocking query identifiers.
const QUERY_LIST_LINE: &str = "The following queries";

// ============================================================================
// SECTION: Pattern Checks
// ============================================================================

/// True when the failure is a duplicate-create the request chose to ignore.
#[must_use]
pub fn is_already_exists(message: &str, request: &QueryRequest) -> bool {
    request.options().ignore_already_exists && message.contains(ALREADY_EXISTS)
}

/// True when the failure indicates a running persistent query depends on
/// the target, or the request asked for unconditional termination.
#[must_use]
pub fn is_dependency_blocked(message: &str, request: &QueryRequest) -> bool {
    request.options().terminate_persistent_query
        || message.contains(UPGRADES_UNSUPPORTED)
        || message.contains(CANNOT_DROP)
}

/// Extracts the query identifiers enumerated inside an error message.
///
/// Looks for a line beginning with `The following queries` and pulls the
/// bracketed, comma-separated identifier list out of it, trimming
/// whitespace and surrounding quote characters from each token. Returns an
/// empty vector when no such line or list exists.
#[must_use]
pub fn embedded_terminate_targets(message: &str) -> Vec<String> {
    let Some(line) = message.lines().find(|line| line.trim_start().starts_with(QUERY_LIST_LINE))
    else {
        return Vec::new();
    };
    let Some(open) = line.find('[') else {
        return Vec::new();
    };
    let Some(close) = line[open..].find(']').map(|offset| open + offset) else {
        return Vec::new();
    };
    line[open + 1..close]
        .split(',')
        .map(|token| token.trim().trim_matches(['\'', '"']).to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
