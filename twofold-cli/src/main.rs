//! Twofold — parse INI-style files and report the outcome through the
//! `Maybe` / `Either` containers.
//!
//! # Usage
//!
//! ```text
//! twofold maybe <path> [--json]
//! twofold either <path> [--json]
//! twofold -v maybe <path>          (debug logging + failure causes on stderr)
//! ```
//!
//! Exit status is 0 when the file parsed and 1 when it did not.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{either::EitherArgs, maybe::MaybeArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "twofold",
    version,
    about = "Parse INI-style files through two-state result containers",
    long_about = None,
)]
struct Cli {
    /// Enable debug logging and print failure causes.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse with the success/failure producer.
    Maybe(MaybeArgs),

    /// Parse with the left/right producer and a coded fault.
    Either(EitherArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let outcome = match cli.command {
        Commands::Maybe(args) => args.run(cli.verbose)?,
        Commands::Either(args) => args.run()?,
    };
    Ok(outcome.exit_code())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
