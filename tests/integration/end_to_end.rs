// tests/integration/end_to_end.rs
use prefix_lines_infra::FsSourceOpener;
use prefix_lines_ports::ComparisonPlan;
use prefix_lines_shared_kernel::{ApplicationError, PrefixLinesError};
use prefix_lines_usecase::{CountCommonPrefix, StopReason};

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn compare(first: &str, second: &str) -> (usize, StopReason) {
    let ws = TempWorkspace::new("end_to_end");
    let a = ws.write_file("a.txt", first);
    let b = ws.write_file("b.txt", second);

    let report = CountCommonPrefix::new(&FsSourceOpener)
        .run(&ComparisonPlan::new(a, b))
        .expect("comparison succeeds");
    (report.matched.value(), report.stop)
}

#[test]
fn diverging_third_line() {
    assert_eq!(compare("a\nb\nc\n", "a\nb\nx\n"), (2, StopReason::Mismatch));
}

#[test]
fn first_is_prefix_of_second() {
    assert_eq!(compare("a\nb\n", "a\nb\nc\n"), (2, StopReason::FirstExhausted));
}

#[test]
fn empty_first_file() {
    assert_eq!(compare("", "a\n"), (0, StopReason::FirstExhausted));
}

#[test]
fn second_is_prefix_of_first() {
    assert_eq!(compare("a\nb\nc\n", "a\nb\n"), (2, StopReason::SecondExhausted));
}

#[test]
fn both_files_empty() {
    assert_eq!(compare("", ""), (0, StopReason::FirstExhausted));
}

#[test]
fn identical_files() {
    let text = "alpha\nbeta\ngamma\ndelta\n";
    assert_eq!(compare(text, text), (4, StopReason::FirstExhausted));
}

#[test]
fn missing_trailing_newline_differs() {
    assert_eq!(compare("a\nb", "a\nb\n"), (1, StopReason::Mismatch));
    assert_eq!(compare("a\nb", "a\nb"), (2, StopReason::FirstExhausted));
}

#[test]
fn line_endings_are_not_normalized() {
    assert_eq!(compare("a\r\nb\r\n", "a\nb\n"), (0, StopReason::Mismatch));
}

#[test]
fn missing_file_is_an_error() {
    let ws = TempWorkspace::new("end_to_end_missing");
    let present = ws.write_file("present.txt", "a\n");

    let err = CountCommonPrefix::new(&FsSourceOpener)
        .run(&ComparisonPlan::new(present, ws.path().join("absent.txt")))
        .unwrap_err();
    assert!(matches!(
        err,
        PrefixLinesError::Application(ApplicationError::SourceUnavailable { role: "second", .. })
    ));
}
