#![no_main]

use libfuzzer_sys::fuzz_target;
use threadops::filter::{FilterConfig, MatchMode, TraceFilter};
use threadops::trace_line;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Tokenizing and filtering must never panic, only report malformed lines
        for line in input.split_inclusive('\n') {
            let _ = trace_line::parse_line(line);
            let _ = trace_line::parse_line_lenient(line);
        }
        for mode in [MatchMode::Exact, MatchMode::Substring] {
            let filter = TraceFilter::new(FilterConfig::new(["t1"]).with_match_mode(mode));
            let _ = filter.filter_text(input);
        }
    }
});
