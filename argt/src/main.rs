//! Argt CLI - dumps the tokens of argcli command/expression input.
//!
//! This is the main entry point for the argt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_kinds, run_lex, LexArgs};
use config::Config;
use error::{ArgtError, Result};

/// Argt - token dump tool for argcli input
///
/// Runs the argcli lexer over files or stdin and prints what it sees,
/// which is mostly useful for finding out why an input is rejected.
#[derive(Parser, Debug)]
#[command(name = "argt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dump tool for argcli input", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ARGT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ARGT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ARGT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the argt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each input
    ///
    /// Reads each INPUT (stdin when none is given, or for `-`) and prints
    /// one token per line. Diagnostics are written to stderr.
    Lex(LexCommand),

    /// List the token kinds
    Kinds(KindsCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Files to lex
    input: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comments out of the output
    #[arg(long)]
    skip_comments: bool,

    /// Don't print token positions
    #[arg(long)]
    no_positions: bool,

    /// Fail if an input has unknown tokens or lexical errors
    #[arg(long)]
    deny_unknown: bool,
}

/// Arguments for the kinds subcommand.
#[derive(Parser, Debug)]
struct KindsCommand {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Main entry point for the argt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system. Logs go to stderr so they never mix
/// with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ArgtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Kinds(args) => run_kinds(args.format),
    }
}

/// Execute the lex command, letting flags override the configuration.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let mut lex_args = LexArgs::from_config(args.input, &config.lex);
    if let Some(format) = args.format {
        lex_args.format = format;
    }
    lex_args.show_positions &= !args.no_positions;
    lex_args.skip_comments |= args.skip_comments;
    lex_args.deny_unknown |= args.deny_unknown;
    run_lex(lex_args)
}
