//! CLI argument parsing for threadops

use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub use crate::filter::{MalformedPolicy, MatchMode};

impl ValueEnum for MatchMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Exact, Self::Substring]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Exact => PossibleValue::new("exact")
                .help("Classify by the exact operation name before '(' (default)"),
            Self::Substring => PossibleValue::new("substring")
                .help("Classify by substrings of the raw line, like the legacy filter"),
        })
    }
}

impl ValueEnum for MalformedPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Strict, Self::Skip]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Strict => PossibleValue::new("strict")
                .help("Abort the run without writing output (default)"),
            Self::Skip => PossibleValue::new("skip").help("Skip the line and log a warning"),
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "threadops")]
#[command(version)]
#[command(
    about = "Filter a thread-event trace down to the lines that concern given thread ids",
    long_about = None
)]
pub struct Cli {
    /// Trace file to filter; output goes to <INPUT>.only
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Thread identifiers to keep; values may start with '-', so give options before them
    #[arg(value_name = "IDENTIFIERS", allow_hyphen_values = true)]
    pub identifiers: Vec<String>,

    /// Line classification strategy
    #[arg(long = "match-mode", value_enum, default_value = "exact")]
    pub match_mode: MatchMode,

    /// Handling of lines without parentheses or with too few arguments
    #[arg(long = "on-malformed", value_enum, default_value = "strict")]
    pub on_malformed: MalformedPolicy,

    /// Print a one-line summary of the run to stderr
    #[arg(long = "summary")]
    pub summary: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_input_and_identifiers() {
        let cli = Cli::parse_from(["threadops", "trace.log", "t1", "t2"]);
        assert_eq!(cli.input, PathBuf::from("trace.log"));
        assert_eq!(cli.identifiers, vec!["t1", "t2"]);
    }

    #[test]
    fn test_cli_identifiers_may_be_empty() {
        let cli = Cli::parse_from(["threadops", "trace.log"]);
        assert!(cli.identifiers.is_empty());
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["threadops"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["threadops", "trace.log", "t1"]);
        assert_eq!(cli.match_mode, MatchMode::Exact);
        assert_eq!(cli.on_malformed, MalformedPolicy::Strict);
        assert!(!cli.summary);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_match_mode_substring() {
        let cli = Cli::parse_from(["threadops", "--match-mode", "substring", "trace.log"]);
        assert_eq!(cli.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_cli_on_malformed_skip() {
        let cli = Cli::parse_from(["threadops", "--on-malformed", "skip", "trace.log", "t1"]);
        assert_eq!(cli.on_malformed, MalformedPolicy::Skip);
        assert_eq!(cli.identifiers, vec!["t1"]);
    }

    #[test]
    fn test_cli_identifiers_may_start_with_hyphen() {
        let cli = Cli::parse_from(["threadops", "trace.log", "-1", "t2", "-worker"]);
        assert_eq!(cli.identifiers, vec!["-1", "t2", "-worker"]);
    }

    #[test]
    fn test_cli_match_mode_values() {
        let names: Vec<String> = MatchMode::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["exact", "substring"]);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["threadops", "--match-mode", "fuzzy", "trace.log"]).is_err());
    }

    #[test]
    fn test_cli_debug_and_summary_flags() {
        let cli = Cli::parse_from(["threadops", "--debug", "--summary", "trace.log"]);
        assert!(cli.debug);
        assert!(cli.summary);
    }
}
