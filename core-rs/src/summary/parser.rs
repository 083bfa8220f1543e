//! DejaGnu summary (`.sum`) parser
//!
//! Splits a test-run log into collections (one per `.exp` file) holding
//! the outcome lines reported for that file:
//!
//! ```text
//! Running /src/gdb/testsuite/gdb.ada/literals.exp ...
//! PASS: gdb.ada/literals.exp: print 1
//! FAIL: gdb.ada/literals.exp: print 2#101#
//! ```
//!
//! Everything that matches neither line shape is log noise and is skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{DgError, Result};

/// `Running <path>/<group>/<collection>.exp ...`
const RE_COLLECTION: &str = r"^Running.*/(?P<group>.*)/(?P<collection>.*\.exp) \.\.\.";

/// `<STATUS>: <anything>.exp: <name>`
const RE_TEST: &str =
    r"^(?P<status>PASS|FAIL|XFAIL|UNTESTED|UNSUPPORTED|UNRESOLVED): .*\.exp: (?P<name>.*)";

/// Line boundaries of the original harness tooling: CRLF, lone CR, LF, VT, FF,
/// FS/GS/RS, NEL and the Unicode line/paragraph separators
const RE_LINE_BREAK: &str = r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]";

/// Outcome kind reported for a single test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Xfail,
    Untested,
    Unsupported,
    Unresolved,
}

impl TestStatus {
    pub const ALL: [TestStatus; 6] = [
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Xfail,
        TestStatus::Untested,
        TestStatus::Unsupported,
        TestStatus::Unresolved,
    ];

    /// Label as it appears at the start of a result line
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Xfail => "XFAIL",
            TestStatus::Untested => "UNTESTED",
            TestStatus::Unsupported => "UNSUPPORTED",
            TestStatus::Unresolved => "UNRESOLVED",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        TestStatus::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// FAIL, UNTESTED and UNRESOLVED need attention when comparing runs
    pub fn is_important(&self) -> bool {
        matches!(
            self,
            TestStatus::Fail | TestStatus::Untested | TestStatus::Unresolved
        )
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported test result line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub status: TestStatus,
}

/// Outcomes of one `.exp` file within a group, in log order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// File name including the `.exp` suffix (e.g. `literals.exp`)
    pub name: String,
    /// Directory the file lives in (e.g. `gdb.ada`)
    pub group: String,
    pub tests: Vec<TestOutcome>,
}

/// Compiled line patterns for `.sum` files
#[derive(Debug, Clone)]
pub struct SummaryParser {
    collection_re: Regex,
    test_re: Regex,
    line_break_re: Regex,
}

impl SummaryParser {
    pub fn new() -> Result<Self> {
        Ok(SummaryParser {
            collection_re: Regex::new(RE_COLLECTION)?,
            test_re: Regex::new(RE_TEST)?,
            line_break_re: Regex::new(RE_LINE_BREAK)?,
        })
    }

    /// Split `text` into lines, dropping the terminator of the last one
    pub fn split_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut lines: Vec<&str> = self.line_break_re.split(text).collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        lines
    }

    /// Match a `Running ...` line, returning `(group, collection)`
    pub fn match_collection_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.collection_re.captures(line)?;
        Some((caps.name("group")?.as_str(), caps.name("collection")?.as_str()))
    }

    /// Match a result line, returning `(status, test name)`
    pub fn match_result_line<'a>(&self, line: &'a str) -> Option<(TestStatus, &'a str)> {
        let caps = self.test_re.captures(line)?;
        let status = TestStatus::from_label(caps.name("status")?.as_str())?;
        Some((status, caps.name("name")?.as_str()))
    }

    /// Parse the full text of a summary into collections.
    ///
    /// # Errors
    /// `DgError::Structural` when a result line shows up before any
    /// `Running` line.
    pub fn parse(&self, text: &str) -> Result<Vec<Collection>> {
        let mut results: Vec<Collection> = Vec::new();
        let mut current: Option<usize> = None;

        for (index, line) in self.split_lines(text).into_iter().enumerate() {
            if let Some((group, collection)) = self.match_collection_line(line) {
                debug!(group, collection, "collection started");
                results.push(Collection {
                    name: collection.to_string(),
                    group: group.to_string(),
                    tests: Vec::new(),
                });
                current = Some(results.len() - 1);
                continue;
            }

            if let Some((status, name)) = self.match_result_line(line) {
                let slot = current.ok_or_else(|| {
                    DgError::Structural(format!(
                        "result line precedes any collection line (line {}: {:?})",
                        index + 1,
                        line
                    ))
                })?;

                results[slot].tests.push(TestOutcome {
                    name: name.to_string(),
                    status,
                });
            }
        }

        Ok(results)
    }
}

/// Parse summary text with a freshly compiled parser
pub fn parse_summary(text: &str) -> Result<Vec<Collection>> {
    SummaryParser::new()?.parse(text)
}

/// Read a UTF-8 summary file and parse it
pub fn parse_summary_file<P: AsRef<Path>>(path: P) -> Result<Vec<Collection>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_summary(&text)
}
