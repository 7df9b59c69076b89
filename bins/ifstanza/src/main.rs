//! ifstanza - read, write and check Debian interfaces files.
//!
//! Converts `/etc/network/interfaces` to and from YAML/JSON documents.

mod check;
mod document;
mod example;
mod files;
mod format;
mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ifstanza")]
#[command(about = "Read, write and check Debian interfaces files", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an interfaces file and print its records
    Parse(parse::ParseArgs),

    /// Write an interfaces file from a desired-state document
    Format(format::FormatArgs),

    /// Check that an interfaces file survives a round trip
    Check(check::CheckArgs),

    /// Generate an example desired-state document
    Example(example::ExampleArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match cli.command {
        Command::Parse(args) => parse::run(args),
        Command::Format(args) => format::run(args),
        Command::Check(args) => check::run(args),
        Command::Example(args) => example::run(args),
    }
}
