//! Error types for conflict resolution.
//!
//! Every variant is local to a single file: the batch driver reports it and
//! moves on to the next plan entry. Plan loading and CLI plumbing use
//! `anyhow` instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Markers are present but do not form a well-formed triple.
    #[error("malformed conflict at line {line}: {reason}")]
    MalformedConflict { line: usize, reason: MalformedReason },

    /// A rule needed a sub-pattern that the theirs side does not contain.
    #[error("pattern not found, no changes applied: {pattern}")]
    PatternNotFound { pattern: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{rules} rules configured for {regions} conflict regions")]
    RuleCountMismatch { regions: usize, rules: usize },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn malformed(line: usize, reason: MalformedReason) -> Self {
        ResolveError::MalformedConflict { line, reason }
    }

    pub fn pattern_not_found(pattern: impl Into<String>) -> Self {
        ResolveError::PatternNotFound {
            pattern: pattern.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResolveError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    NestedStart,
    StraySeparator,
    StrayEnd,
    EndBeforeSeparator,
    DuplicateSeparator,
    UnexpectedMarker(String),
    Unterminated,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NestedStart => write!(f, "start marker inside an open conflict"),
            Self::StraySeparator => write!(f, "separator outside a conflict"),
            Self::StrayEnd => write!(f, "end marker outside a conflict"),
            Self::EndBeforeSeparator => write!(f, "end marker before separator"),
            Self::DuplicateSeparator => write!(f, "second separator in one conflict"),
            Self::UnexpectedMarker(line) => write!(f, "unexpected marker line '{line}'"),
            Self::Unterminated => write!(f, "conflict not closed before end of file"),
        }
    }
}
