//! End-to-end tests running the compiled multicat binary

use super::test_utils::{
    multicat_command, project_fixture, run_multicat, stderr_of, stdout_of, write_file,
};
use multicat::aggregate::format_entry;
use tempfile::TempDir;

#[test]
fn test_prints_report_for_project() {
    let project = project_fixture();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "multicat should succeed: stderr={:?}",
        stderr_of(&output)
    );
    let expected = format!("{}\n", format_entry(&root.join("a.txt"), "hello"));
    assert_eq!(stdout_of(&output), expected);
    assert!(!stdout_of(&output).contains("skip me"));
}

#[test]
fn test_empty_directory_reports_no_files() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path().to_str().unwrap();

    let output = run_multicat(sandbox.path(), &[root]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), format!("No text files found in {}\n", root));
}

#[test]
fn test_file_root_exits_with_error() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let file = write_file(project.path(), "notes.txt", b"notes");

    let output = run_multicat(sandbox.path(), &[file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: Specified path is invalid or not a directory"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_missing_root_exits_with_error() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let missing = project.path().join("missing");

    let output = run_multicat(sandbox.path(), &[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_max_depth_flag() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, "top.txt", b"top level");
    write_file(root, "sub/nested.txt", b"nested level");

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap(), "-d", "1"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("top level"));
    assert!(!stdout.contains("nested level"));

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap(), "--max-depth", "0"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("No text files found in"));
}

#[test]
fn test_unreadable_file_is_skipped() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, "good.txt", b"good contents");
    write_file(root, "bad.txt", &[0x62, 0x61, 0x64, 0xff, 0xfe]);

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("good contents"));
    assert!(!stdout_of(&output).contains("bad.txt"));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error reading file"));
    assert!(stderr.contains("bad.txt"));
}

#[test]
fn test_workspace_config_adds_ignore_names() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, ".multicat.toml", b"[walk]\nextra_ignore = [\"generated\"]\n");
    write_file(root, "kept.txt", b"kept");
    write_file(root, "generated/out.txt", b"generated output");

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("kept"));
    assert!(!stdout.contains("generated output"));
}

#[test]
fn test_invalid_config_file_exits_with_error() {
    let project = project_fixture();
    let sandbox = TempDir::new().unwrap();
    let config = write_file(sandbox.path(), "bad.toml", b"[walk]\nextra_ignore = [\"\"]\n");

    let output = run_multicat(
        sandbox.path(),
        &[
            project.path().to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Configuration validation failed"));
}

#[test]
fn test_sniff_flag_includes_extensionless_text() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, "LICENSE", b"Permission is hereby granted");

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap()]);
    assert!(stdout_of(&output).starts_with("No text files found in"));

    let output = run_multicat(sandbox.path(), &[root.to_str().unwrap(), "--sniff"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Permission is hereby granted"));
}

#[test]
fn test_default_root_prints_bare_relative_paths() {
    let project = project_fixture();
    let sandbox = TempDir::new().unwrap();
    write_file(project.path(), "src/main.py", b"print()");

    let output = multicat_command(sandbox.path())
        .current_dir(project.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={:?}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("File: a.txt\n"), "stdout={:?}", stdout);
    assert!(stdout.contains("File: src/main.py\n"), "stdout={:?}", stdout);
    assert!(!stdout.contains("File: ./"));
}

#[test]
fn test_env_override_bounds_depth() {
    let project = TempDir::new().unwrap();
    let sandbox = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, "top.txt", b"top");
    write_file(root, "sub/nested.txt", b"nested");

    let output = multicat_command(sandbox.path())
        .env("MULTICAT_WALK__MAX_DEPTH", "1")
        .arg(root.to_str().unwrap())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={:?}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("top"));
    assert!(!stdout.contains("nested"));
}
