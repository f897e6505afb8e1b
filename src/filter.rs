//! Thread-identifier filtering of trace lines
//!
//! A single forward pass decides for every line whether it is dropped
//! outright, retained because one of its identity arguments is in the
//! identifier set, or left out because nothing matched. Retained lines keep
//! their original zero-based index and their text byte-for-byte.

use crate::classify::{self, ArgumentRole};
use crate::error::{FilterError, MalformedReason, Result};
use crate::trace_line::{self, Operation};
use std::collections::HashSet;

/// How trace lines are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Classify by the exact operation name before `(`
    #[default]
    Exact,
    /// Classify and tokenize like the legacy `threadOps` filter
    Substring,
}

/// What to do with a line that cannot be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the run without writing output
    #[default]
    Strict,
    /// Skip the line and log a warning
    Skip,
}

/// Settings for one filtering run
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Thread identifiers to keep, compared by exact string equality
    pub identifiers: HashSet<String>,
    pub match_mode: MatchMode,
    pub on_malformed: MalformedPolicy,
}

impl FilterConfig {
    /// Config with default modes for the given identifiers
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}

/// A line that survived the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedLine {
    /// Zero-based position in the input
    pub index: usize,
    /// Original text, including its line terminator if it had one
    pub text: String,
}

/// Per-line decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    Retained,
    /// Operation is in the dropped set
    Dropped,
    /// No identity argument is in the identifier set
    Unmatched,
}

/// Line counts for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub retained: usize,
    pub dropped: usize,
    pub unmatched: usize,
    pub skipped_malformed: usize,
}

/// Result of a filtering pass
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Retained lines in ascending index order
    pub retained: Vec<RetainedLine>,
    pub stats: FilterStats,
}

/// Trace filter for a fixed identifier set
#[derive(Debug, Clone)]
pub struct TraceFilter {
    config: FilterConfig,
}

impl TraceFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Decide the fate of a single line
    pub fn evaluate(&self, line: &str) -> std::result::Result<LineVerdict, MalformedReason> {
        if trace_line::is_blank(line) {
            return Ok(LineVerdict::Unmatched);
        }

        // The drop check runs before tokenizing, so a truncated dropped
        // line is still just dropped
        let (role, op) = match self.config.match_mode {
            MatchMode::Exact => {
                let role = classify::role_for_name(trace_line::operation_name(line));
                if role == ArgumentRole::Dropped {
                    return Ok(LineVerdict::Dropped);
                }
                (role, trace_line::parse_line(line)?)
            }
            MatchMode::Substring => {
                let role = classify::role_for_line_substring(line);
                if role == ArgumentRole::Dropped {
                    return Ok(LineVerdict::Dropped);
                }
                (role, trace_line::parse_line_lenient(line))
            }
        };

        if self.matches(role, &op)? {
            Ok(LineVerdict::Retained)
        } else {
            Ok(LineVerdict::Unmatched)
        }
    }

    fn matches(
        &self,
        role: ArgumentRole,
        op: &Operation,
    ) -> std::result::Result<bool, MalformedReason> {
        let expected = role.required_args();
        if op.args.len() < expected {
            return Err(MalformedReason::TooFewArguments {
                expected,
                found: op.args.len(),
            });
        }

        Ok(role
            .identity_positions()
            .iter()
            .filter_map(|&position| op.arg(position))
            .any(|id| self.config.identifiers.contains(id)))
    }

    /// Filter an ordered sequence of lines
    pub fn filter_lines<'a, I>(&self, lines: I) -> Result<FilterOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut outcome = FilterOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            outcome.stats.total += 1;

            match self.evaluate(line) {
                Ok(LineVerdict::Retained) => {
                    tracing::debug!(index, "retained");
                    outcome.stats.retained += 1;
                    outcome.retained.push(RetainedLine {
                        index,
                        text: line.to_string(),
                    });
                }
                Ok(LineVerdict::Dropped) => {
                    tracing::trace!(index, "dropped");
                    outcome.stats.dropped += 1;
                }
                Ok(LineVerdict::Unmatched) => {
                    outcome.stats.unmatched += 1;
                }
                Err(reason) => match self.config.on_malformed {
                    MalformedPolicy::Strict => {
                        return Err(FilterError::MalformedLine {
                            index,
                            line: line.trim_end().to_string(),
                            reason,
                        });
                    }
                    MalformedPolicy::Skip => {
                        tracing::warn!(index, %reason, "skipping malformed trace line");
                        outcome.stats.skipped_malformed += 1;
                    }
                },
            }
        }

        Ok(outcome)
    }

    /// Filter a whole trace held in memory, splitting after each `\n`
    pub fn filter_text(&self, text: &str) -> Result<FilterOutcome> {
        self.filter_lines(text.split_inclusive('\n'))
    }
}
