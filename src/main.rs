//! Pally - derive shade palettes from base colors
//!
//! Command-line front end for the palette engine. Every command reads and
//! writes palette JSON documents.

use clap::{Parser, Subcommand};
use pally::cli::{
    CliResult, ConfigArgs, DeriveArgs, NewArgs, RenameArgs, ResetArgs, ResizeArgs, SetColorArgs,
    ShowArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pally - derive shade palettes from base colors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new palette file
    New(NewArgs),
    /// Grow or shrink a palette
    Resize(ResizeArgs),
    /// Replace the base color of one slot
    SetColor(SetColorArgs),
    /// Rename one slot
    Rename(RenameArgs),
    /// Restore the default palette
    Reset(ResetArgs),
    /// Print a palette
    Show(ShowArgs),
    /// Print the shades of a single color
    Derive(DeriveArgs),
    /// Check that a palette file can be imported
    Validate(ValidateArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::New(args) => args.execute(),
            Self::Resize(args) => args.execute(),
            Self::SetColor(args) => args.execute(),
            Self::Rename(args) => args.execute(),
            Self::Reset(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Derive(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.command.execute() {
        if err.needs_report() {
            eprintln!("Error: {err}");
        }
        std::process::exit(err.code.code());
    }
}
