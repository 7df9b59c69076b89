//! Interfaces file parser.
//!
//! A single pass over the lines, threading a parse state through one handler
//! per classified line kind.

use tracing::{debug, trace};

use super::line::{Line, classify};
use super::types::{AttributeRecord, Flag, IfaceBlock, InterfaceMap};
use crate::error::{Error, Result};

/// Parse the contents of an interfaces file.
///
/// Returns every interface mentioned by a flag line or an `iface` stanza.
/// Fails on the first malformed or unsupported line; no partial map is
/// returned.
///
/// # Example
///
/// ```
/// let map = ifstanza::parse("auto lo\niface lo inet loopback\n")?;
///
/// let lo = &map["lo"];
/// assert!(lo.is_auto());
/// assert_eq!(lo.iface().unwrap().method(), Some("loopback"));
/// # Ok::<(), ifstanza::Error>(())
/// ```
pub fn parse(content: &str) -> Result<InterfaceMap> {
    let state = content
        .lines()
        .enumerate()
        .try_fold(ParseState::default(), |mut state, (index, raw)| {
            state.step(index + 1, raw)?;
            Ok::<_, Error>(state)
        })?;

    debug!(
        interfaces = state.interfaces.len(),
        "parsed interfaces file"
    );
    Ok(state.interfaces)
}

/// Which stanza continuation lines currently belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Mode {
    /// No open stanza; a continuation line is an error.
    #[default]
    None,
    /// Inside `iface <name> ...`.
    Iface(String),
}

#[derive(Debug, Default)]
struct ParseState {
    mode: Mode,
    interfaces: InterfaceMap,
}

impl ParseState {
    fn step(&mut self, line: usize, raw: &str) -> Result<()> {
        let classified = classify(raw).map_err(|e| Error::malformed(line, e.to_string()))?;

        match classified {
            Line::Blank => {
                trace!(line, "skipping blank line");
                Ok(())
            }
            Line::Flag { flag, names } => {
                self.on_flag(line, flag, &names);
                Ok(())
            }
            Line::Iface {
                name,
                family,
                method,
            } => self.on_iface(line, name, family, method),
            Line::Mapping => Err(Error::unsupported(line, "mapping")),
            Line::Continuation { text, fields } => self.on_continuation(line, text, fields),
        }
    }

    /// A flag line closes any open stanza.
    fn on_flag(&mut self, line: usize, flag: Flag, names: &[&str]) {
        debug!(line, %flag, count = names.len(), "flag stanza");

        for name in names {
            self.interfaces
                .entry((*name).to_string())
                .or_default()
                .set_flag(flag.clone());
        }
        self.mode = Mode::None;
    }

    fn on_iface(&mut self, line: usize, name: &str, family: &str, method: &str) -> Result<()> {
        debug!(line, interface = name, family, method, "iface stanza");

        let record = self.interfaces.entry(name.to_string()).or_default();
        if record.iface().is_some() {
            return Err(Error::malformed(
                line,
                format!("duplicate iface block for {}", name),
            ));
        }
        record.set_iface(IfaceBlock::new(family, method));

        self.mode = Mode::Iface(name.to_string());
        Ok(())
    }

    fn on_continuation(&mut self, line: usize, text: &str, fields: usize) -> Result<()> {
        let Mode::Iface(current) = &self.mode else {
            return Err(Error::malformed(
                line,
                "option line outside of an iface stanza",
            ));
        };

        if fields < 2 {
            return Err(Error::malformed(
                line,
                format!("option '{}' has no value", text.trim()),
            ));
        }

        let block = self
            .interfaces
            .get_mut(current)
            .and_then(AttributeRecord::iface_mut)
            .ok_or_else(|| Error::malformed(line, format!("no iface block open for {}", current)))?;

        trace!(line, interface = %current, option = text.trim(), "iface option");
        block.push_option(text);
        Ok(())
    }
}
