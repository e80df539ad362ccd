// crates/ksql-reconciler-client/src/executor.rs
// ============================================================================
// Module: Retry Executor
// Description: Bounded retry-and-recovery loop for statement submission.
// Purpose: Submit a request, interpret the outcome, unblock dependency
//          failures, and retry on a fixed backoff schedule.
// Dependencies: ksql-reconciler-core, log, thiserror
// ============================================================================

//! ## Overview
//! The executor drives one reconciliation request to a single outcome. It
//! makes at most one submission per backoff-schedule entry, sleeping the
//! entry's duration after every non-terminal attempt except the last.
//! Recoverable failures mutate only the working statement text between
//! attempts; the request itself never changes. Intermediate failures are
//! logged, not surfaced; the caller sees the result identifier or the last
//! recorded error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;

use ksql_reconciler_core::BackoffSchedule;
use ksql_reconciler_core::OperationKind;
use ksql_reconciler_core::QueryRequest;
use ksql_reconciler_core::StatementTransport;
use ksql_reconciler_core::TransportError;
use ksql_reconciler_core::classify;
use ksql_reconciler_core::embedded_terminate_targets;
use ksql_reconciler_core::is_already_exists;
use ksql_reconciler_core::is_dependency_blocked;
use ksql_reconciler_core::statement_for;
use thiserror::Error;

use crate::resolver::terminate_dependencies_of;

// ============================================================================
// SECTION: Execution Errors
// ============================================================================

/// Final failure surfaced to the caller after the retry budget is spent.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The last attempt failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The engine kept reporting a semantic error.
    #[error("invalid engine response: {message}")]
    Engine {
        /// Last engine-reported message.
        message: String,
    },
    /// The schedule allowed no attempts at all.
    #[error("retry schedule is empty")]
    NoAttempts,
}

// ============================================================================
// SECTION: Retry Executor
// ============================================================================

/// Bounded retry loop for one reconciliation request.
///
/// # Invariants
/// - At most one submission per schedule entry.
/// - Read requests resolve without any transport work.
pub struct RetryExecutor {
    /// Inter-attempt pause schedule; its length bounds the attempts.
    schedule: BackoffSchedule,
}

impl Default for RetryExecutor {
    fn default() -> Self {
        Self::new(BackoffSchedule::default())
    }
}

impl RetryExecutor {
    /// Creates an executor with an explicit schedule.
    #[must_use]
    pub const fn new(schedule: BackoffSchedule) -> Self {
        Self {
            schedule,
        }
    }

    /// Executes a request to completion and returns its result identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] with the last recorded failure once every
    /// scheduled attempt has been spent.
    pub fn execute<T: StatementTransport>(
        &self,
        transport: &T,
        request: &QueryRequest,
    ) -> Result<String, ExecuteError> {
        if request.operation() == OperationKind::Read {
            log::debug!("read request [{}] resolves without submission", request.id());
            return Ok(request.id());
        }

        let original = statement_for(request);
        let mut statement = original.clone();
        let mut spliced = false;
        let mut last_error: Option<ExecuteError> = None;

        let attempts = self.schedule.attempts();
        for (attempt, delay) in self.schedule.iter().enumerate() {
            log::debug!("attempt {} for [{}]: {statement}", attempt + 1, request.id());
            let submission = transport.execute(&statement);
            if spliced {
                statement.clone_from(&original);
                spliced = false;
            }

            match submission {
                Err(err) => {
                    log::warn!("failed to make post ksql request [{err}] retrying...");
                    last_error = Some(ExecuteError::Transport(err));
                }
                Ok(body) => {
                    let outcome = classify(&body);
                    if outcome.is_success() {
                        return Ok(request.id());
                    }
                    if is_already_exists(&outcome.message, request) {
                        log::debug!("[{}] already exists, treated as success", request.id());
                        return Ok(request.id());
                    }

                    let targets = if original.starts_with("DROP") {
                        embedded_terminate_targets(&outcome.message)
                    } else {
                        Vec::new()
                    };
                    if targets.is_empty() {
                        if is_dependency_blocked(&outcome.message, request) {
                            if let Err(err) = terminate_dependencies_of(transport, request.name())
                            {
                                log::warn!(
                                    "failed to terminate queries writing into [{}]: {err}",
                                    request.name()
                                );
                            }
                        }
                    } else {
                        // Next attempt only; the working copy reverts after it.
                        statement = format!("TERMINATE {};{original}", targets.join(", "));
                        spliced = true;
                    }
                    last_error = Some(ExecuteError::Engine {
                        message: outcome.message,
                    });
                }
            }

            if attempt + 1 < attempts {
                thread::sleep(delay);
            }
        }

        Err(last_error.unwrap_or(ExecuteError::NoAttempts))
    }
}
