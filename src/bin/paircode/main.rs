//! `paircode` CLI.

use std::io;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Subcommand implementations.
mod commands;
/// CLI error type.
mod error;
/// User-facing output.
mod output;

use error::{CliError, Result};
use output::Output;

fn main() {
    if let Err(err) = run() {
        Output::error_user(err.user_message());
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "paircode")]
#[command(about = "Generate, check and convert device pairing codes", version)]
#[command(arg_required_else_help = true)]
/// Top-level arguments.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors).
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    /// Selected subcommand.
    command: Commands,
}

#[derive(Subcommand)]
/// Available subcommands.
enum Commands {
    /// Generate random pairing codes.
    Generate(commands::generate::CmdArgs),

    /// Check pairing codes (exit 1 if any is invalid).
    Check(commands::check::CmdArgs),

    /// Normalize typed input (case, aliases, whitespace).
    Normalize(commands::normalize::CmdArgs),

    /// Append the check character to a code body.
    Checkchar(commands::checkchar::CmdArgs),

    /// Encode an integer as a pairing code.
    Encode(commands::encode::CmdArgs),

    /// Decode a pairing code to its integer value.
    Decode(commands::decode::CmdArgs),
}

/// Shared state handed to every subcommand.
pub struct Context {
    /// User-facing output.
    out: Output,
}

/// Install the diagnostic subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "paircode=debug"
    } else {
        "paircode=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parse arguments and dispatch.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    init_tracing(cli.verbose);
    debug!(version = env!("CARGO_PKG_VERSION"), "starting paircode");

    let ctx = Context {
        out: Output::new(cli.quiet, cli.verbose),
    };

    match cli.command {
        Commands::Generate(args) => commands::generate::run(&ctx, &args),
        Commands::Check(args) => commands::check::run(&ctx, &args),
        Commands::Normalize(args) => commands::normalize::run(&ctx, &args),
        Commands::Checkchar(args) => commands::checkchar::run(&ctx, &args),
        Commands::Encode(args) => commands::encode::run(&ctx, &args),
        Commands::Decode(args) => commands::decode::run(&ctx, &args),
    }
}
