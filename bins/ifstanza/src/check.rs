//! Check command - verify an interfaces file survives a round trip.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use ifstanza::Formatter;
use tracing::warn;

use crate::files::{DEFAULT_PATH, read_input};

#[derive(Args)]
pub struct CheckArgs {
    /// Interfaces file to check ("-" for stdin)
    #[arg(default_value = DEFAULT_PATH)]
    pub file: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let name = args.file.display();
    let text = read_input(&args.file)?;

    let map = ifstanza::parse(&text).with_context(|| format!("failed to parse {}", name))?;
    let records: Vec<_> = map.iter().collect();
    let written = Formatter::new()
        .render(&records)
        .with_context(|| format!("failed to format {}", name))?;
    let reread = ifstanza::parse(&written).context("formatted output does not parse")?;

    let changed: Vec<&str> = map
        .iter()
        .filter(|(iface, record)| reread.get(*iface) != Some(*record))
        .map(|(iface, _)| iface.as_str())
        .collect();

    if !changed.is_empty() {
        for iface in &changed {
            warn!(interface = iface, "record changes when written back");
        }
        bail!(
            "{}: {} interface(s) change on round trip: {}",
            name,
            changed.len(),
            changed.join(", ")
        );
    }

    println!("{}: ok ({} interfaces)", name, map.len());
    Ok(())
}
