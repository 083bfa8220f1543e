//! # DG Tools - DejaGnu test harness helpers
//!
//! Small utilities used next to a DejaGnu testsuite run:
//!
//! - [`port`]: pick a random TCP port that nothing listens on, so a
//!   simulator or gdbserver can be started on it
//! - [`summary`]: parse a `.sum` log into collections of test outcomes
//!   and flatten them into comparable records
//! - [`compare`]: intersect the important outcomes of two runs
//!
//! ## Summary layout
//!
//! ```text
//! Running /src/gdb/testsuite/gdb.ada/literals.exp ...   <- collection
//! PASS: gdb.ada/literals.exp: print 16#f#               <- outcome
//! FAIL: gdb.ada/literals.exp: print 2#101#              <- outcome
//! ```

pub mod compare;
pub mod errors;
pub mod port;
pub mod summary;

pub use compare::{
    compare_files, compare_lines, compare_summaries, ComparisonReport, DEFAULT_HSDK_SUMMARY,
    DEFAULT_NSIM_SUMMARY,
};
pub use errors::DgError;
pub use port::{pick_available_port, LoopbackProbe, PortFinder, PortProbe, PortRange};
pub use summary::{
    flatten, parse_summary, parse_summary_file, Collection, FlatRecord, SummaryParser,
    TestOutcome, TestStatus,
};

/// Version of the tools
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
