//! Operation classification
//!
//! Maps a trace operation to the argument positions that carry thread
//! identities. Two strategies are available:
//!
//! - exact: the parsed operation name indexes the vocabulary below
//! - substring: raw-line substring tests, compatible with the legacy
//!   `threadOps` filter (an identifier like `wait1` drops its line)

/// How the arguments of an operation relate to thread identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRole {
    /// Position 0 is the thread (`threadinit`, `deq`, `permit`, ...)
    Source,
    /// Positions 0 and 1 are both threads (`fork`, `join`)
    SourceTarget,
    /// `enq(source, queue, target)`: only the source is matched
    SourceWithIgnoredTarget,
    /// Never retained (memory, I/O, monitor and lock events)
    Dropped,
    /// Unrecognized operation, treated like `Source`
    GenericSource,
}

impl ArgumentRole {
    /// Argument positions compared against the identifier set
    pub fn identity_positions(self) -> &'static [usize] {
        match self {
            Self::Source | Self::SourceWithIgnoredTarget | Self::GenericSource => &[0],
            Self::SourceTarget => &[0, 1],
            Self::Dropped => &[],
        }
    }

    /// Minimum number of arguments the line must carry
    ///
    /// `enq` needs its target slot even though the target is not matched.
    pub fn required_args(self) -> usize {
        match self {
            Self::Source | Self::GenericSource => 1,
            Self::SourceTarget => 2,
            Self::SourceWithIgnoredTarget => 3,
            Self::Dropped => 0,
        }
    }
}

/// Operations that are never retained
pub const DROPPED_OPERATIONS: [&str; 11] = [
    "read",
    "write",
    "alloc",
    "free",
    "entermonitor",
    "exitmonitor",
    "notify",
    "notifyall",
    "wait",
    "acquire",
    "release",
];

/// Operations matched on argument 0 only
pub const SOURCE_OPERATIONS: [&str; 9] = [
    "threadinit",
    "threadexit",
    "deq",
    "end",
    "permit",
    "revoke",
    "enterloop",
    "exitloop",
    "reset",
];

/// Raw-line patterns that drop a line in substring mode
///
/// `read(` and `notify(` keep their paren so `threadinit` and `notifyall`
/// lines are not caught by the shorter pattern.
pub const LEGACY_DROP_PATTERNS: [&str; 11] = [
    "read(",
    "write",
    "alloc",
    "free",
    "entermonitor",
    "exitmonitor",
    "notifyall(",
    "notify(",
    "wait",
    "acquire",
    "release",
];

/// Classify by exact operation name
pub fn role_for_name(name: &str) -> ArgumentRole {
    match name {
        "enq" => ArgumentRole::SourceWithIgnoredTarget,
        "fork" | "join" => ArgumentRole::SourceTarget,
        _ if DROPPED_OPERATIONS.contains(&name) => ArgumentRole::Dropped,
        _ if SOURCE_OPERATIONS.contains(&name) => ArgumentRole::Source,
        _ => ArgumentRole::GenericSource,
    }
}

/// Classify by substrings of the raw line, drop patterns first
pub fn role_for_line_substring(line: &str) -> ArgumentRole {
    if LEGACY_DROP_PATTERNS.iter().any(|p| line.contains(p)) {
        ArgumentRole::Dropped
    } else if line.contains("enq") {
        ArgumentRole::SourceWithIgnoredTarget
    } else if line.contains("fork") || line.contains("join") {
        ArgumentRole::SourceTarget
    } else {
        ArgumentRole::GenericSource
    }
}
