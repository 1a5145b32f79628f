// crates/client-policy-cli/src/main.rs
// ============================================================================
// Module: Client Policy CLI Entry Point
// Description: Command dispatcher for configuration and request evaluation.
// Purpose: Validate policy configuration and evaluate requests offline.
// Dependencies: clap, client-policy-cli, client-policy-config, client-policy-executors
// ============================================================================

//! ## Overview
//! The `client-policy` binary validates profile configuration and runs single
//! authorization requests through a profile's executor chain. A rejected
//! request exits with status 2 so scripts can tell it apart from errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use client_policy_cli::Verdict;
use client_policy_cli::activate_named_profile;
use client_policy_cli::activate_profiles;
use client_policy_cli::audit_sink;
use client_policy_cli::authorization_context;
use client_policy_cli::read_authorization_request;
use client_policy_config::ClientPolicyConfig;
use client_policy_config::config_toml_example;
use client_policy_executors::ExecutorRegistry;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Exit status for a request rejected by policy.
const REJECTED_EXIT_CODE: u8 = 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "client-policy", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Evaluate an authorization request against a profile.
    Evaluate(EvaluateCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a configuration file and activate every profile.
    Validate(ConfigValidateCommand),
    /// Print the canonical example configuration.
    Example,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file path (defaults to `CLIENT_POLICY_CONFIG` or client-policy.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `evaluate`.
#[derive(Args, Debug)]
struct EvaluateCommand {
    /// Config file path (defaults to `CLIENT_POLICY_CONFIG` or client-policy.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Profile to evaluate.
    #[arg(long, value_name = "NAME")]
    profile: String,
    /// Authorization request parameters as a JSON object.
    #[arg(long, value_name = "PATH")]
    request: PathBuf,
    /// Response type override.
    #[arg(long, value_name = "TYPE")]
    response_type: Option<String>,
    /// Resolved redirect URI override.
    #[arg(long, value_name = "URI")]
    redirect_uri: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Evaluate(command) => command_evaluate(&command),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Example => {
            write_stdout(&config_toml_example())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let registry = builtin_registry()?;
    let chains =
        activate_profiles(&registry, &config).map_err(|err| CliError::new(err.to_string()))?;
    let executors: usize = chains.iter().map(|chain| chain.len()).sum();
    write_stdout(&format!(
        "config ok: {} profile(s), {executors} executor(s)\n",
        chains.len()
    ))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Evaluate Command
// ============================================================================

/// Executes the evaluate command.
fn command_evaluate(command: &EvaluateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let registry = builtin_registry()?;
    let sink = audit_sink(&config.audit).map_err(|err| CliError::new(err.to_string()))?;
    let chain = activate_named_profile(&registry, &config, &command.profile)
        .map_err(|err| CliError::new(err.to_string()))?
        .with_audit_sink(sink);
    let request = read_authorization_request(&command.request)
        .map_err(|err| CliError::new(err.to_string()))?;
    let context = authorization_context(
        request,
        command.response_type.as_deref(),
        command.redirect_uri.as_deref(),
    )
    .map_err(|err| CliError::new(err.to_string()))?;

    let verdict = Verdict::from_result(command.profile.as_str(), chain.evaluate(context));
    let mut rendered = serde_json::to_string(&verdict)
        .map_err(|err| CliError::new(format!("failed to render verdict: {err}")))?;
    rendered.push('\n');
    write_stdout(&rendered)?;
    if verdict.passed() { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::from(REJECTED_EXIT_CODE)) }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration from an explicit path or the default resolution rules.
fn load_config(path: Option<&Path>) -> CliResult<ClientPolicyConfig> {
    ClientPolicyConfig::load(path)
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Creates the registry of built-in executors.
fn builtin_registry() -> CliResult<ExecutorRegistry> {
    ExecutorRegistry::with_builtin_executors().map_err(|err| CliError::new(err.to_string()))
}

/// Writes text to stdout.
fn write_stdout(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .map_err(|err| CliError::new(format!("failed to write stdout: {err}")))
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
