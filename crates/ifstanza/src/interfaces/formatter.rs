//! Interfaces file formatter.
//!
//! Output layout:
//!
//! 1. a header comment block,
//! 2. one line per flag in the order `auto`, `allow-auto`, `allow-hotplug`,
//!    listing the flagged interfaces sorted by name,
//! 3. one block per `iface` stanza, in record order.
//!
//! The output always parses back to the same records, comments aside.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::line::classify;
use super::types::{Flag, IfaceBlock, InterfaceRecord};
use crate::error::{Error, Result};

/// Header written at the top of generated files.
pub const DEFAULT_HEADER: &str = "\
# HEADER: This file is being managed by ifstanza. While it can still be
# HEADER: edited by hand, changes may be lost the next time it is written.";

/// Interfaces file formatter.
///
/// # Example
///
/// ```
/// use ifstanza::{AttributeRecord, Flag, Formatter, IfaceBlock, Interface};
///
/// let records = vec![
///     Interface::new("lo", AttributeRecord::new()
///         .with_flag(Flag::Auto)
///         .with_iface(IfaceBlock::new("inet", "loopback"))),
/// ];
///
/// let text = Formatter::new().no_header().render(&records)?;
/// assert_eq!(text, "auto lo\n\niface lo inet loopback\n");
/// # Ok::<(), ifstanza::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    header: Option<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }
}

impl Formatter {
    /// Create a formatter writing [`DEFAULT_HEADER`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom header. Lines not already starting with `#` are
    /// commented out so the header never parses as a stanza.
    pub fn header(mut self, text: &str) -> Self {
        self.header = Some(commented(text));
        self
    }

    /// Omit the header block.
    pub fn no_header(mut self) -> Self {
        self.header = None;
        self
    }

    /// Format records into text blocks.
    ///
    /// Fails with [`Error::InvalidRecord`] if a record cannot be written in a
    /// form the parser would read back: an iface block missing its family or
    /// method, a name or family that is not a single word, an option line
    /// that would not parse as an option, or two iface blocks for one name.
    pub fn format<R: InterfaceRecord>(&self, records: &[R]) -> Result<Vec<String>> {
        debug!(records = records.len(), "formatting interfaces");

        let mut blocks = Vec::new();
        if let Some(header) = &self.header {
            blocks.push(header.clone());
        }

        for record in records {
            let attributes = record.attributes();
            let written =
                attributes.iface().is_some() || attributes.flags().any(Flag::is_formatted);
            if written {
                check_word(record.name(), record.name(), "interface name")?;
            }
            for flag in attributes.flags().filter(|f| !f.is_formatted()) {
                warn!(
                    interface = record.name(),
                    %flag,
                    "flag is not written to the interfaces file"
                );
            }
        }

        for flag in &Flag::FORMATTED {
            let mut names: Vec<&str> = records
                .iter()
                .filter(|r| r.attributes().has_flag(flag))
                .map(InterfaceRecord::name)
                .collect();
            if names.is_empty() {
                continue;
            }
            names.sort_unstable();
            names.dedup();
            blocks.push(format!("{} {}", flag, names.join(" ")));
        }

        let mut declared = HashSet::new();
        for record in records {
            let Some(iface) = record.attributes().iface() else {
                continue;
            };
            if !declared.insert(record.name()) {
                return Err(Error::invalid_record(
                    record.name(),
                    "iface block declared more than once",
                ));
            }
            blocks.push(iface_block(record.name(), iface)?);
        }

        Ok(blocks)
    }

    /// Format records into the full file body: blocks separated by blank
    /// lines, ending with a newline.
    pub fn render<R: InterfaceRecord>(&self, records: &[R]) -> Result<String> {
        let mut text = self.format(records)?.join("\n\n");
        text.push('\n');
        Ok(text)
    }
}

/// Format records with the default header.
pub fn format<R: InterfaceRecord>(records: &[R]) -> Result<Vec<String>> {
    Formatter::new().format(records)
}

/// Render records with the default header.
pub fn render<R: InterfaceRecord>(records: &[R]) -> Result<String> {
    Formatter::new().render(records)
}

fn iface_block(name: &str, iface: &IfaceBlock) -> Result<String> {
    let (Some(family), Some(method)) = (iface.family(), iface.method()) else {
        return Err(Error::invalid_record(
            name,
            "does not have a method or family",
        ));
    };
    check_word(name, family, "family")?;
    check_word(name, method, "method")?;

    let mut lines = Vec::with_capacity(iface.options().len() + 1);
    lines.push(format!("iface {} {} {}", name, family, method));
    for option in iface.options() {
        check_option(name, option)?;
        lines.push(option.clone());
    }

    debug!(
        interface = name,
        options = iface.options().len(),
        "formatted iface block"
    );
    Ok(lines.join("\n"))
}

fn check_word(interface: &str, value: &str, what: &str) -> Result<()> {
    let valid = !value.is_empty() && !value.contains(|c: char| c.is_ascii_whitespace() || c == '#');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_record(
            interface,
            format!("{} '{}' is not a single word", what, value),
        ))
    }
}

fn check_option(interface: &str, option: &str) -> Result<()> {
    let reads_back = !option.contains(['\n', '\r'])
        && classify(option).is_ok_and(|line| line.is_option());
    if reads_back {
        Ok(())
    } else {
        Err(Error::invalid_record(
            interface,
            format!("option line '{}' would not be read back as an option", option),
        ))
    }
}

fn commented(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                line.to_string()
            } else if line.trim().is_empty() {
                "#".to_string()
            } else {
                format!("# {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
