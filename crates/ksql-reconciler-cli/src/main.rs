// crates/ksql-reconciler-cli/src/main.rs
// ============================================================================
// Module: ksql-reconciler CLI Entry Point
// Description: Command dispatcher for applying and destroying entities.
// Purpose: Expose the reconciliation client as a small operational tool.
// Dependencies: clap, env_logger, ksql-reconciler-client, ksql-reconciler-core
// ============================================================================

//! ## Overview
//! The CLI wraps [`ReconcilerClient`] with two commands: `apply` submits a
//! create statement for a stream or table and `destroy` drops one. On
//! success the result identifier is printed for the caller to persist; on
//! failure the final recorded error is printed and the process exits
//! nonzero. Retry diagnostics go through `env_logger` (`RUST_LOG=warn` and
//! up).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use ksql_reconciler_client::EndpointConfig;
use ksql_reconciler_client::ReconcilerClient;
use ksql_reconciler_core::OperationKind;
use ksql_reconciler_core::RequestOptions;
use ksql_reconciler_core::ResourceType;
use ksql_reconciler_core::SessionProperties;

// ============================================================================
// SECTION: Command Definitions
// ============================================================================

/// Reconciles streaming-SQL entities against a ksqlDB-compatible engine.
#[derive(Debug, Parser)]
#[command(name = "ksql-reconciler", version)]
struct Cli {
    /// Engine base URL, without the `/ksql` path.
    #[arg(long, env = "KSQL_URL")]
    url: String,
    /// Basic-auth username.
    #[arg(long, env = "KSQL_USERNAME", default_value = "")]
    username: String,
    /// Basic-auth password.
    #[arg(long, env = "KSQL_PASSWORD", default_value = "")]
    password: String,
    /// Command to execute.
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Submits a create statement for a stream or table.
    Apply(ApplyCommand),
    /// Drops a stream or table.
    Destroy(DestroyCommand),
}

/// Entity kind accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EntityKind {
    /// A continuously updated stream.
    Stream,
    /// A materialized table.
    Table,
}

impl From<EntityKind> for ResourceType {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Stream => Self::Stream,
            EntityKind::Table => Self::Table,
        }
    }
}

/// Arguments for the `apply` command.
#[derive(Debug, Args)]
struct ApplyCommand {
    /// Name of the entity to create.
    #[arg(long)]
    name: String,
    /// Entity kind.
    #[arg(long, value_enum)]
    r#type: EntityKind,
    /// Statement body creating the entity.
    #[arg(long)]
    statement: String,
    /// Session property as `key=value`; repeatable.
    #[arg(long = "property", value_parser = parse_property)]
    properties: Vec<(String, String)>,
    /// Treat an "already exists" failure as success.
    #[arg(long)]
    ignore_already_exists: bool,
    /// Terminate dependent persistent queries on any failure.
    #[arg(long)]
    terminate_persistent_query: bool,
}

/// Arguments for the `destroy` command.
#[derive(Debug, Args)]
struct DestroyCommand {
    /// Name of the entity to drop.
    #[arg(long)]
    name: String,
    /// Entity kind.
    #[arg(long, value_enum)]
    r#type: EntityKind,
    /// Drop the backing topic together with the entity.
    #[arg(long)]
    delete_topic: bool,
    /// Terminate dependent persistent queries on any failure.
    #[arg(long)]
    terminate_persistent_query: bool,
}

/// Parses a `key=value` property argument.
fn parse_property(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("expected key=value, got [{raw}]"))
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(id) => match write_stdout_line(&id) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Err(message) => {
            let _ = write_stderr_line(&message);
            ExitCode::FAILURE
        }
    }
}

/// Executes the selected command and returns the result identifier.
fn run(cli: Cli) -> Result<String, String> {
    let config = EndpointConfig::new(cli.url, cli.username, cli.password);
    let client = ReconcilerClient::new(config).map_err(|err| err.to_string())?;

    match cli.command {
        Command::Apply(command) => {
            let options = RequestOptions {
                ignore_already_exists: command.ignore_already_exists,
                delete_topic_on_destroy: false,
                terminate_persistent_query: command.terminate_persistent_query,
            };
            let properties = SessionProperties::from_pairs(command.properties);
            let request = client.request(
                &command.name,
                OperationKind::Create,
                command.r#type.into(),
                &command.statement,
                &properties,
                options,
            );
            client.submit(&request).map_err(|err| err.to_string())
        }
        Command::Destroy(command) => {
            let options = RequestOptions {
                ignore_already_exists: false,
                delete_topic_on_destroy: command.delete_topic,
                terminate_persistent_query: command.terminate_persistent_query,
            };
            let request = client.request(
                &command.name,
                OperationKind::Delete,
                command.r#type.into(),
                "",
                &SessionProperties::new(),
                options,
            );
            client.submit(&request).map_err(|err| err.to_string())
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}
