//! Integration tests for reading and rendering reports

use super::test_utils::{project_fixture, write_file};
use multicat::aggregate::{parse_entry, read_records, separator};
use multicat::{list_text_files, Report};
use tempfile::TempDir;

#[test]
fn test_scenario_report_has_single_block() {
    let project = project_fixture();
    let files = list_text_files(project.path(), None).unwrap();
    let records = read_records(&files, |e| panic!("unexpected read failure: {}", e));
    let report = Report::from_records(&records);

    assert_eq!(report.file_count(), 1);
    let (path, body) = parse_entry(&report.blocks()[0]).unwrap();
    assert!(path.ends_with("a.txt"));
    assert_eq!(body, "hello");
}

#[test]
fn test_blocks_joined_with_single_newline_in_walk_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "one.txt", b"first");
    write_file(root, "two.md", b"second");
    write_file(root, "three.py", b"third");

    let files = list_text_files(root, None).unwrap();
    let records = read_records(&files, |_| {});
    let report = Report::from_records(&records);
    let rendered = report.render();

    assert_eq!(report.file_count(), 3);
    let closing = format!("{}\n\nFile: ", separator());
    assert_eq!(rendered.matches(closing.as_str()).count(), 2);

    // Report order follows walk order
    let order: Vec<_> = report
        .blocks()
        .iter()
        .map(|b| parse_entry(b).unwrap().0)
        .collect();
    assert_eq!(order, files);
}

#[test]
fn test_contents_preserved_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let contents = "  leading spaces\n\ttabs\n\n\ntrailing newline\n";
    write_file(root, "verbatim.txt", contents.as_bytes());

    let files = list_text_files(root, None).unwrap();
    let report = Report::from_records(&read_records(&files, |_| {}));
    let (path, body) = parse_entry(&report.blocks()[0]).unwrap();

    assert_eq!(path, root.join("verbatim.txt"));
    assert_eq!(body, contents);
}

#[test]
fn test_empty_files_are_left_out() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "empty.txt", b"");
    write_file(root, "full.txt", b"full");

    let files = list_text_files(root, None).unwrap();
    assert_eq!(files.len(), 2);

    let report = Report::from_records(&read_records(&files, |_| {}));
    assert_eq!(report.file_count(), 1);
    assert!(!report.render().contains("empty.txt"));
}
