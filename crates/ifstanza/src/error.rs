//! Error types for interfaces file operations.

/// Result type for interfaces file operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or formatting an interfaces file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file violates the stanza grammar.
    #[error("malformed interfaces file at line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The file uses a stanza this crate does not handle.
    #[error("unsupported stanza at line {line}: {feature} parsing is not implemented")]
    Unsupported {
        /// 1-based line number of the offending line.
        line: usize,
        /// The stanza keyword (e.g., "mapping").
        feature: String,
    },

    /// A record cannot be written out.
    #[error("{interface}: {reason}")]
    InvalidRecord {
        /// The interface the record belongs to.
        interface: String,
        /// Why the record cannot be formatted.
        reason: String,
    },
}

impl Error {
    /// Create a malformed-file error for a line.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Create an unsupported-feature error for a line.
    pub fn unsupported(line: usize, feature: impl Into<String>) -> Self {
        Self::Unsupported {
            line,
            feature: feature.into(),
        }
    }

    /// Create an invalid-record error for an interface.
    pub fn invalid_record(interface: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            interface: interface.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a syntax error in the parsed text.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Check if this is an unsupported-feature error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Check if this is a format-time record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }

    /// Get the line number if this is a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Malformed { line, .. } | Self::Unsupported { line, .. } => Some(*line),
            Self::InvalidRecord { .. } => None,
        }
    }

    /// Get the interface name if this is a record error.
    pub fn interface(&self) -> Option<&str> {
        match self {
            Self::InvalidRecord { interface, .. } => Some(interface),
            _ => None,
        }
    }
}
