//! End-to-end tests for the mdtoc CLI binary

use std::path::Path;
use std::process::Command;

/// Run the mdtoc binary with given args and return (exit_code, stdout, stderr)
fn run_mdtoc_in(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_mdtoc"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("Failed to execute mdtoc binary");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn test_cli_version() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _stderr) = run_mdtoc_in(dir.path(), &["--version"]);
    assert_eq!(code, 0, "--version should exit 0");
    assert!(stdout.contains("mdtoc"));
}

#[test]
fn test_cli_help() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _stderr) = run_mdtoc_in(dir.path(), &["--help"]);
    assert_eq!(code, 0, "--help should exit 0");
    assert!(stdout.contains("Table of Contents"));
}

#[test]
fn test_cli_source_dest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("guide.md"), "# Guide\n## Setup\n### Install\n## Usage\n").unwrap();
    std::fs::write(dir.path().join("README.md"), "# Readme\n**MD-TOC**\n").unwrap();

    let (code, stdout, stderr) = run_mdtoc_in(dir.path(), &["--no-color", "guide.md", "README.md"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("README.md (3 entries)"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "# Readme\n### Table of Contents\n- [Setup](#setup)\n    - [Install](#install)\n- [Usage](#usage)\n"
    );
}

#[test]
fn test_cli_missing_marker_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.md"), "# A\n## B\n").unwrap();
    std::fs::write(dir.path().join("b.md"), "no marker\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["a.md", "b.md"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("**MD-TOC**"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("b.md")).unwrap(),
        "no marker\n"
    );
}

#[test]
fn test_cli_rejects_non_markdown() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "# A\n").unwrap();
    std::fs::write(dir.path().join("b.md"), "**MD-TOC**\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["a.txt", "b.md"]);
    assert_eq!(code, 1);
    assert!(stderr.contains(".md suffix"));
}

#[test]
fn test_cli_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.md"), "**MD-TOC**\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["missing.md", "b.md"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("File not found"));
}

#[test]
fn test_cli_wrong_arg_count() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["only.md"]);
    assert_eq!(code, 2, "usage errors exit with clap's code");
    assert!(stderr.contains("SOURCE and DEST"));
}

#[test]
fn test_cli_print() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("doc.md"), "# T\n## A & B\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc_in(dir.path(), &["--print", "doc.md"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "### Table of Contents\n- [A & B](#a--b)\n");
}

#[test]
fn test_cli_print_rejects_non_markdown() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "# T\n## A\n").unwrap();

    let (code, stdout, stderr) = run_mdtoc_in(dir.path(), &["--print", "notes.txt"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains(".md suffix"), "stderr: {}", stderr);
}

#[test]
fn test_cli_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("doc.md"), "# T\n**MD-TOC**\n## A\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc_in(dir.path(), &["--dry-run", "doc.md", "doc.md"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "# T\n### Table of Contents\n- [A](#a)\n## A\n");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("doc.md")).unwrap(),
        "# T\n**MD-TOC**\n## A\n"
    );
}

#[test]
fn test_cli_in_place_directory() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir_all(docs.join("skip")).unwrap();
    std::fs::write(docs.join("one.md"), "# One\n**MD-TOC**\n## Alpha\n").unwrap();
    std::fs::write(docs.join("two.md"), "# Two\n**MD-TOC**\n## Beta\n").unwrap();
    std::fs::write(docs.join("skip").join("three.md"), "# Three\n**MD-TOC**\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(
        dir.path(),
        &["--in-place", "--ignore", "**/skip/**", "docs"],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(std::fs::read_to_string(docs.join("one.md")).unwrap().contains("- [Alpha](#alpha)"));
    assert!(std::fs::read_to_string(docs.join("two.md")).unwrap().contains("- [Beta](#beta)"));
    assert_eq!(
        std::fs::read_to_string(docs.join("skip").join("three.md")).unwrap(),
        "# Three\n**MD-TOC**\n"
    );
}

#[test]
fn test_cli_in_place_directory_skips_unmarked() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    std::fs::write(docs.join("guide.md"), "# Guide\n**MD-TOC**\n## Setup\n").unwrap();
    std::fs::write(docs.join("CHANGELOG.md"), "# Changelog\n## 1.0\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["--in-place", "docs"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(
        std::fs::read_to_string(docs.join("guide.md"))
            .unwrap()
            .contains("- [Setup](#setup)")
    );
    assert_eq!(
        std::fs::read_to_string(docs.join("CHANGELOG.md")).unwrap(),
        "# Changelog\n## 1.0\n"
    );
}

#[test]
fn test_cli_in_place_named_file_without_marker_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n## 1.0\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["--in-place", "CHANGELOG.md"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("**MD-TOC**"), "stderr: {}", stderr);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        "# Changelog\n## 1.0\n"
    );
}

#[test]
fn test_cli_custom_marker_and_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".mdtoc.toml"), "indent_width = 2\n").unwrap();
    std::fs::write(dir.path().join("doc.md"), "# T\n<!-- toc -->\n## A\n### B\n").unwrap();

    let (code, _stdout, stderr) = run_mdtoc_in(
        dir.path(),
        &["--marker", "<!-- toc -->", "doc.md", "doc.md"],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("doc.md")).unwrap(),
        "# T\n### Table of Contents\n- [A](#a)\n  - [B](#b)\n## A\n### B\n"
    );
}

#[test]
fn test_cli_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    let (code, _stdout, _stderr) = run_mdtoc_in(dir.path(), &["init", "--format", "yaml"]);
    assert_eq!(code, 0);
    let written = std::fs::read_to_string(dir.path().join(".mdtoc.yaml")).unwrap();
    assert!(written.contains("marker"));

    let (code, _stdout, stderr) = run_mdtoc_in(dir.path(), &["init", "--format", "yaml"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));
}
