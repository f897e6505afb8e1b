//! Error taxonomy for the trace filter
//!
//! Every failure is fatal for the run: the input cannot be read, the output
//! cannot be written, or (in strict mode) a line cannot be matched.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a trace line could not be tokenized or matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No `(` anywhere on the line
    MissingOpenParen,
    /// No `)` after the first `(`
    MissingCloseParen,
    /// The matching rule needs more argument positions than the line has
    TooFewArguments { expected: usize, found: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOpenParen => write!(f, "missing '('"),
            Self::MissingCloseParen => write!(f, "missing ')' after '('"),
            Self::TooFewArguments { expected, found } => write!(
                f,
                "expected at least {} argument(s), found {}",
                expected, found
            ),
        }
    }
}

/// Errors that abort a filtering run
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Cannot read trace file {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write filtered trace {}: {source}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed trace line {index} ({reason}): {line}")]
    MalformedLine {
        index: usize,
        line: String,
        reason: MalformedReason,
    },
}

/// Result type for trace filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
