// Summary Parsing Contract Tests
//
// These tests pin down how a DejaGnu `.sum` file is turned into collections
// and flat records. Other tooling compares the rendered lines of two runs, so
// any drift in grouping, ordering or rendering silently changes reports.

use dg_tools::{flatten, parse_summary, DgError, SummaryParser, TestStatus};

const SAMPLE: &str = "\
Test run by builder on Tue Mar  5 10:00:00 2024
Target is arc-unknown-elf

Running target arc-nsim
Running /work/gdb/testsuite/gdb.ada/literals.exp ...
PASS: gdb.ada/literals.exp: print 1
FAIL: gdb.ada/literals.exp: print 2#101#
Running /work/gdb/testsuite/gdb.base/break.exp ...
UNSUPPORTED: gdb.base/break.exp: hardware breakpoints
XFAIL: gdb.base/break.exp: catch fork
UNTESTED: gdb.base/break.exp: break.exp
Running /work/gdb/testsuite/gdb.mi/mi-var.exp ...
UNRESOLVED: gdb.mi/mi-var.exp: create var
PASS: gdb.mi/mi-var.exp: delete var

\t\t=== gdb Summary ===
";

/// WHY: Every result line must survive parse + flatten
/// BREAKS: Counts in comparison reports if outcomes are dropped or duplicated
#[test]
fn flatten_preserves_result_line_count() {
    let parser = SummaryParser::new().unwrap();
    let result_lines = SAMPLE
        .lines()
        .filter(|line| parser.match_result_line(line).is_some())
        .count();

    let flat = flatten(&parser.parse(SAMPLE).unwrap());

    assert_eq!(result_lines, 7);
    assert_eq!(flat.len(), result_lines);
}

/// WHY: Collections and tests come out in log order
/// BREAKS: First-occurrence listings that rely on log order
#[test]
fn parsing_is_order_preserving() {
    let collections = parse_summary(SAMPLE).unwrap();

    let names: Vec<(&str, &str)> = collections
        .iter()
        .map(|c| (c.group.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("gdb.ada", "literals.exp"),
            ("gdb.base", "break.exp"),
            ("gdb.mi", "mi-var.exp"),
        ]
    );

    let statuses: Vec<TestStatus> = collections[1].tests.iter().map(|t| t.status).collect();
    assert_eq!(
        statuses,
        vec![TestStatus::Unsupported, TestStatus::Xfail, TestStatus::Untested]
    );
}

/// WHY: An outcome without an enclosing `Running` line cannot be attributed
/// REASON: There is no implicit "current collection"
#[test]
fn orphan_result_line_is_structural_error_for_every_status() {
    for status in TestStatus::ALL {
        let text = format!("Native configuration is x86_64\n{}: sample.exp: test1\n", status);
        let result = parse_summary(&text);
        assert!(
            matches!(result, Err(DgError::Structural(_))),
            "{} before any collection must be rejected",
            status
        );
    }
}

/// WHY: Rendered records are re-readable as result lines
/// BREAKS: Tools that grep rendered reports for status and test name
#[test]
fn rendered_record_round_trips_status_and_instance() {
    let parser = SummaryParser::new().unwrap();

    for record in flatten(&parse_summary(SAMPLE).unwrap()) {
        let rendered = record.render();
        let (status, instance) = parser
            .match_result_line(&rendered)
            .unwrap_or_else(|| panic!("rendered line must match: {}", rendered));

        assert_eq!(status, record.status);
        assert_eq!(instance, record.instance);
    }
}

/// WHY: `.exp` suffix is part of the collection name
#[test]
fn collection_name_keeps_exp_suffix() {
    let text = "Running a/b/sample.exp ...\nPASS: sample.exp: test1\nFAIL: sample.exp: test2\n";
    let collections = parse_summary(text).unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].name, "sample.exp");
    assert_eq!(collections[0].group, "b");
    assert_eq!(collections[0].tests.len(), 2);
    assert_eq!(collections[0].tests[0].name, "test1");
    assert_eq!(collections[0].tests[0].status, TestStatus::Pass);
    assert_eq!(collections[0].tests[1].name, "test2");
    assert_eq!(collections[0].tests[1].status, TestStatus::Fail);
}

/// WHY: Rendering format is shared with the comparison report
#[test]
fn flat_record_rendering_format() {
    let flat = flatten(&parse_summary(SAMPLE).unwrap());
    assert_eq!(flat[0].render(), "PASS: gdb.ada/literals.exp: print 1");
    assert_eq!(flat[1].to_string(), "FAIL: gdb.ada/literals.exp: print 2#101#");
}
