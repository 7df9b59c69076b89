//! Debian ifupdown interfaces file codec.
//!
//! This module converts between the text of `/etc/network/interfaces` and a
//! map of per-interface records, and back.
//!
//! # Overview
//!
//! ```ignore
//! use ifstanza::interfaces::{Formatter, parse};
//!
//! // Current state, from text read by the caller
//! let current = parse(&text)?;
//!
//! // Desired state, written back in a stable layout
//! let records: Vec<_> = current.iter().collect();
//! let output = Formatter::new().render(&records)?;
//! ```
//!
//! # Supported Stanzas
//!
//! - `auto <name>...`
//! - `allow-<class> <name>...` (`allow-auto` and `allow-hotplug` are written
//!   back; other classes are parsed but not written)
//! - `iface <name> <family> <method>` followed by option lines
//!
//! `mapping` stanzas are rejected with [`Error::Unsupported`](crate::Error::Unsupported).
//! Comments are dropped and backslash line continuations are not joined.

mod formatter;
mod line;
mod parser;
mod types;

pub use formatter::{DEFAULT_HEADER, Formatter, format, render};
pub use line::{Line, LineError, classify};
pub use parser::parse;
pub use types::*;
