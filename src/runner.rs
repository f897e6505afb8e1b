//! End-to-end filtering run: read the trace, filter it, write `<input>.only`

use crate::error::{FilterError, Result};
use crate::filter::{FilterConfig, FilterStats, TraceFilter};
use crate::output;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub output_path: PathBuf,
    pub stats: FilterStats,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} lines retained ({} dropped, {} unmatched, {} malformed skipped)",
            self.output_path.display(),
            self.stats.retained,
            self.stats.total,
            self.stats.dropped,
            self.stats.unmatched,
            self.stats.skipped_malformed
        )
    }
}

/// Filter `input` and write the retained lines next to it
///
/// Nothing is written unless the whole pass succeeds, so a failed run
/// leaves any earlier `.only` file untouched.
pub fn run(input: &Path, config: &FilterConfig) -> Result<FilterSummary> {
    let text = std::fs::read_to_string(input).map_err(|source| FilterError::InputAccess {
        path: input.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %input.display(),
        identifiers = config.identifiers.len(),
        mode = ?config.match_mode,
        "filtering trace"
    );

    let outcome = TraceFilter::new(config.clone()).filter_text(&text)?;

    let output_path = output::output_path_for(input);
    output::write_output_file(&output_path, &outcome.retained)?;

    let summary = FilterSummary {
        output_path,
        stats: outcome.stats,
    };
    tracing::info!("{}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MalformedPolicy;

    #[test]
    fn test_run_writes_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.log");
        std::fs::write(
            &input,
            "threadinit(t1)\nread(t1,1)\nenq(t1, q, t2)\ndeq(t2)\njoin(t1,t2)\n",
        )
        .unwrap();

        let summary = run(&input, &FilterConfig::new(["t1"])).unwrap();

        assert_eq!(summary.output_path, dir.path().join("trace.log.only"));
        assert_eq!(summary.stats.retained, 3);
        assert_eq!(
            std::fs::read_to_string(&summary.output_path).unwrap(),
            "0: threadinit(t1)\n2: enq(t1, q, t2)\n4: join(t1,t2)\n"
        );
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.log");

        let err = run(&input, &FilterConfig::new(["t1"])).unwrap_err();
        assert!(matches!(err, FilterError::InputAccess { .. }));
        assert!(!dir.path().join("nope.log.only").exists());
    }

    #[test]
    fn test_run_malformed_leaves_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.log");
        let stale = dir.path().join("trace.log.only");
        std::fs::write(&input, "threadinit(t1)\nfork(t1)\n").unwrap();
        std::fs::write(&stale, "old\n").unwrap();

        let err = run(&input, &FilterConfig::new(["t1"])).unwrap_err();
        assert!(matches!(err, FilterError::MalformedLine { index: 1, .. }));
        assert_eq!(std::fs::read_to_string(&stale).unwrap(), "old\n");
    }

    #[test]
    fn test_run_skip_policy_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("trace.log");
        std::fs::write(&input, "threadinit(t1)\nfork(t1)\n").unwrap();

        let config = FilterConfig::new(["t1"]).with_malformed_policy(MalformedPolicy::Skip);
        let summary = run(&input, &config).unwrap();
        assert_eq!(summary.stats.skipped_malformed, 1);
        assert_eq!(
            std::fs::read_to_string(&summary.output_path).unwrap(),
            "0: threadinit(t1)\n"
        );
    }

    #[test]
    fn test_summary_display() {
        let summary = FilterSummary {
            output_path: PathBuf::from("trace.log.only"),
            stats: FilterStats {
                total: 5,
                retained: 3,
                dropped: 1,
                unmatched: 1,
                skipped_malformed: 0,
            },
        };
        assert_eq!(
            summary.to_string(),
            "trace.log.only: 3 of 5 lines retained (1 dropped, 1 unmatched, 0 malformed skipped)"
        );
    }
}
