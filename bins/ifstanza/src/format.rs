//! Format command - write an interfaces file from a desired-state document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ifstanza::Formatter;
use tracing::info;

use crate::document::{Document, DocumentFormat};
use crate::files::{read_input, write_atomic};

#[derive(Args)]
pub struct FormatArgs {
    /// Desired-state document to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Document format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,

    /// Replace this file instead of printing to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header text written at the top of the file
    #[arg(long, conflicts_with = "no_header")]
    pub header: Option<String>,

    /// Do not write a header
    #[arg(long)]
    pub no_header: bool,
}

pub fn run(args: FormatArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let document: Document = args
        .format
        .decode(&text)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let document = document.with_managed_defaults();

    let formatter = match (&args.header, args.no_header) {
        (_, true) => Formatter::new().no_header(),
        (Some(header), false) => Formatter::new().header(header),
        (None, false) => Formatter::new(),
    };
    let contents = formatter
        .render(&document.interfaces)
        .context("failed to format interfaces")?;

    match args.output {
        Some(path) => {
            write_atomic(&path, &contents)?;
            info!(
                path = %path.display(),
                interfaces = document.interfaces.len(),
                "interfaces file written"
            );
        }
        None => print!("{}", contents),
    }
    Ok(())
}
