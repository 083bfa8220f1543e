//! Cross-run comparison of DejaGnu summaries
//!
//! Two runs of the same testsuite (e.g. on the nSIM simulator and on HS
//! development kit hardware) are reduced to the rendered lines of their
//! important outcomes. Lines present in both runs are failures that do not
//! depend on the target.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::errors::Result;
use crate::summary::{flatten, parse_summary, parse_summary_file, Collection, TestStatus};

/// Summary produced by the nSIM run
pub const DEFAULT_NSIM_SUMMARY: &str = "examples/nsim/gdb.sum";

/// Summary produced by the HSDK run
pub const DEFAULT_HSDK_SUMMARY: &str = "examples/hsdk/gdb.sum";

/// Entries containing this marker are left out of the fail listing
pub const EXCLUDED_FAIL_MARKER: &str = "gdb.mi";

/// Result of intersecting two runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Important lines present in both runs (sorted for stable output)
    pub intersection: Vec<String>,
    /// FAIL lines from the intersection, minus excluded ones, sorted
    pub failing_tests: Vec<String>,
    /// `group/collection` of each failing test, first occurrence order
    pub failing_collections: Vec<String>,
}

impl ComparisonReport {
    /// Plain-text report as printed by `tests-analyzer`
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Intersection of important instances: {}",
            self.intersection.len()
        )?;
        writeln!(f, "Fails: {}", self.failing_tests.len())?;
        for collection in &self.failing_collections {
            writeln!(f, "{}", collection)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render every outcome as `<status>: <group>/<collection>: <instance>`
pub fn render_lines(collections: &[Collection]) -> Vec<String> {
    flatten(collections).iter().map(|r| r.render()).collect()
}

/// Whether a rendered line starts with FAIL, UNTESTED or UNRESOLVED
pub fn is_important_line(line: &str) -> bool {
    TestStatus::ALL
        .iter()
        .filter(|status| status.is_important())
        .any(|status| line.starts_with(status.as_str()))
}

/// Compare two lists of rendered outcome lines
pub fn compare_lines<S: AsRef<str>>(nsim: &[S], hsdk: &[S]) -> ComparisonReport {
    let nsim_important: HashSet<&str> = nsim
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_important_line(line))
        .collect();
    let hsdk_important: HashSet<&str> = hsdk
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_important_line(line))
        .collect();

    let mut intersection: Vec<String> = nsim_important
        .intersection(&hsdk_important)
        .map(|line| line.to_string())
        .collect();
    intersection.sort();

    // Already sorted, so the collection listing below walks it lexicographically
    let failing_tests: Vec<String> = intersection
        .iter()
        .filter(|line| line.starts_with(TestStatus::Fail.as_str()))
        .filter(|line| !line.contains(EXCLUDED_FAIL_MARKER))
        .cloned()
        .collect();

    let mut failing_collections: Vec<String> = Vec::new();
    for failing_test in &failing_tests {
        if let Some(collection) = failing_test.split(": ").nth(1) {
            if !failing_collections.iter().any(|c| c == collection) {
                failing_collections.push(collection.to_string());
            }
        }
    }

    info!(
        intersection = intersection.len(),
        fails = failing_tests.len(),
        collections = failing_collections.len(),
        "compared summaries"
    );

    ComparisonReport {
        intersection,
        failing_tests,
        failing_collections,
    }
}

/// Compare the text of two summaries
pub fn compare_summaries(nsim_text: &str, hsdk_text: &str) -> Result<ComparisonReport> {
    let nsim = render_lines(&parse_summary(nsim_text)?);
    let hsdk = render_lines(&parse_summary(hsdk_text)?);
    Ok(compare_lines(&nsim, &hsdk))
}

/// Read and compare two summary files
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    nsim_path: P,
    hsdk_path: Q,
) -> Result<ComparisonReport> {
    let nsim = render_lines(&parse_summary_file(nsim_path.as_ref())?);
    let hsdk = render_lines(&parse_summary_file(hsdk_path.as_ref())?);
    info!(nsim = nsim.len(), hsdk = hsdk.len(), "loaded summaries");
    Ok(compare_lines(&nsim, &hsdk))
}
