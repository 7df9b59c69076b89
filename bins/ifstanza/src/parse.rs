//! Parse command - print the records of an interfaces file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::document::{Document, DocumentFormat};
use crate::files::{DEFAULT_PATH, read_input};

#[derive(Args)]
pub struct ParseArgs {
    /// Interfaces file to read ("-" for stdin)
    #[arg(default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,

    /// Show only specific interface
    #[arg(short, long)]
    pub interface: Option<String>,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    let mut map = ifstanza::parse(&text)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    if let Some(ref filter) = args.interface {
        map.retain(|name, _| name == filter);
    }

    let document = Document::from_map(map);
    print!("{}", with_newline(args.format.encode(&document)?));
    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
