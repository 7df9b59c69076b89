//! Line classification.
//!
//! Each raw line is reduced to a [`Line`] before the parser looks at it, so
//! the stanza state machine never deals with text matching.

use winnow::combinator::{opt, repeat, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::types::Flag;

/// Result type for winnow parsers.
type PResult<T> = core::result::Result<T, ErrMode<ContextError>>;

/// A classified line of an interfaces file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace-only, or comment-only.
    Blank,
    /// `auto` or `allow-<class>` followed by interface names.
    Flag { flag: Flag, names: Vec<&'a str> },
    /// `iface <name> <family> <method>`.
    Iface {
        name: &'a str,
        family: &'a str,
        method: &'a str,
    },
    /// `mapping ...`.
    Mapping,
    /// Anything else: an option line belonging to the open stanza.
    Continuation {
        /// Line with the comment removed, otherwise verbatim.
        text: &'a str,
        /// Number of whitespace-separated fields.
        fields: usize,
    },
}

impl Line<'_> {
    /// Check if this is an option line with a key and a value.
    pub fn is_option(&self) -> bool {
        matches!(self, Line::Continuation { fields, .. } if *fields >= 2)
    }
}

/// Error classifying a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// A column-0 `auto`/`allow-` prefix that is not a known flag keyword.
    #[error("unknown stanza keyword '{0}'")]
    UnknownKeyword(String),
    /// An `iface` line without exactly three arguments.
    #[error("iface line must be 'iface <name> <family> <method>', got {0} fields")]
    IfaceShape(usize),
    /// The line could not be split into fields.
    #[error("unreadable line")]
    Unreadable,
}

/// Classify one line of an interfaces file.
///
/// Text from the first `#` onward is ignored. Stanza keywords are only
/// recognised at column 0; an indented line is always a continuation.
///
/// # Example
///
/// ```
/// use ifstanza::interfaces::{Line, classify};
///
/// assert_eq!(classify("  # nothing here").unwrap(), Line::Blank);
/// assert_eq!(
///     classify("iface eth0 inet dhcp").unwrap(),
///     Line::Iface { name: "eth0", family: "inet", method: "dhcp" },
/// );
/// assert!(classify("    address 10.0.0.2").unwrap().is_option());
/// ```
pub fn classify(raw: &str) -> Result<Line<'_>, LineError> {
    let text = strip_comment(raw);

    let mut input = text;
    let words = fields
        .parse_next(&mut input)
        .map_err(|_| LineError::Unreadable)?;

    let Some(&keyword) = words.first() else {
        return Ok(Line::Blank);
    };

    if !text.starts_with(is_blank) {
        if text.starts_with("auto") || text.starts_with("allow-") {
            let flag = Flag::from_keyword(keyword)
                .ok_or_else(|| LineError::UnknownKeyword(keyword.to_string()))?;
            return Ok(Line::Flag {
                flag,
                names: words[1..].to_vec(),
            });
        }

        if text.starts_with("iface") {
            return match *words.as_slice() {
                ["iface", name, family, method] => Ok(Line::Iface {
                    name,
                    family,
                    method,
                }),
                _ => Err(LineError::IfaceShape(words.len())),
            };
        }

        if text.starts_with("mapping") {
            return Ok(Line::Mapping);
        }
    }

    Ok(Line::Continuation {
        text,
        fields: words.len(),
    })
}

fn strip_comment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(before, _)| before)
}

fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn blank<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., is_blank).parse_next(input)
}

fn word<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_till(1.., is_blank).parse_next(input)
}

/// Split a line into whitespace-separated fields.
fn fields<'a>(input: &mut &'a str) -> PResult<Vec<&'a str>> {
    opt(blank).parse_next(input)?;
    repeat(0.., terminated(word, opt(blank))).parse_next(input)
}
