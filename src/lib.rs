//! threadops - thread-event trace filter
//!
//! Reduces a trace of thread events (`fork(t1, t2)`, `enq(t1, q, t2)`,
//! `permit(t1, 3)`, ...) to the lines that concern a set of thread
//! identifiers, keeping each line's original index for debugging and
//! visualization.

pub mod classify;
pub mod cli;
pub mod error;
pub mod filter;
pub mod output;
pub mod runner;
pub mod trace_line;
