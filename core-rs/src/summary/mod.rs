//! DejaGnu summary (`.sum`) parsing
//!
//! - [`parser`]: line scanner producing [`Collection`]s of [`TestOutcome`]s
//! - [`flat`]: denormalized [`FlatRecord`] view used for run comparison

pub mod flat;
pub mod parser;

pub use flat::{flatten, FlatRecord};
pub use parser::{
    parse_summary, parse_summary_file, Collection, SummaryParser, TestOutcome, TestStatus,
};
