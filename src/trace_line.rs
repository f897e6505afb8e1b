//! Trace line tokenizer
//!
//! Turns a raw line such as `[T3] fork(t1, t2)\n` into an [`Operation`]:
//! the operation name is the identifier token right before the first `(`,
//! and the arguments are the text between the first `(` and the last `)`
//! with all spaces removed, split on `,`.

use crate::error::MalformedReason;

/// A tokenized trace event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, e.g. `fork` or `enq`
    pub name: String,
    /// Positional arguments in source order
    pub args: Vec<String>,
}

impl Operation {
    /// Argument at `position`, if the line has that many
    pub fn arg(&self, position: usize) -> Option<&str> {
        self.args.get(position).map(String::as_str)
    }
}

/// Byte offsets of the first `(` and the last `)`
fn paren_span(line: &str) -> Result<(usize, usize), MalformedReason> {
    let open = line.find('(').ok_or(MalformedReason::MissingOpenParen)?;
    match line.rfind(')') {
        Some(close) if close > open => Ok((open, close)),
        _ => Err(MalformedReason::MissingCloseParen),
    }
}

/// Split an argument list into space-free tokens
///
/// An empty list yields a single empty token, so `end()` has an argument 0.
pub fn split_args(inner: &str) -> Vec<String> {
    inner.replace(' ', "").split(',').map(str::to_string).collect()
}

/// Identifier token right before the first `(`
///
/// Lines without `(` fall back to their first whitespace-separated word, so
/// a truncated `wait t1` still names its operation.
pub fn operation_name(line: &str) -> &str {
    let Some(open) = line.find('(') else {
        return line.split_whitespace().next().unwrap_or_default();
    };

    let prefix = line[..open].trim_end();
    let start = prefix
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
        .last()
        .map_or(prefix.len(), |(i, _)| i);
    &prefix[start..]
}

/// Tokenize one trace line
pub fn parse_line(line: &str) -> Result<Operation, MalformedReason> {
    let (open, close) = paren_span(line)?;

    Ok(Operation {
        name: operation_name(line).to_string(),
        args: split_args(&line[open + 1..close]),
    })
}

/// Tokenize the way the legacy `threadOps` script slices lines
///
/// The argument text runs from after the first `(` (or the line start) up to
/// the last `)`, or up to but excluding the final character when there is no
/// `)`. This never fails, so `permit(t1, 3` yields `["t1", ""]`.
pub fn parse_line_lenient(line: &str) -> Operation {
    let start = line.find('(').map_or(0, |open| open + 1);
    let end = line
        .rfind(')')
        .or_else(|| line.char_indices().last().map(|(i, _)| i))
        .unwrap_or_default();
    let inner = if end >= start { &line[start..end] } else { "" };

    Operation {
        name: operation_name(line).to_string(),
        args: split_args(inner),
    }
}

/// True for lines with nothing but whitespace (e.g. a trailing empty line)
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
