// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use catalog_runner::models::ResultsArtifact;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Catalog used by most end-to-end tests: two automated entries, one manual.
pub const MIXED_CATALOG: &str = r#"
tests:
  - id: T1
    type: auto
  - id: T2
    type: auto-unittest
  - id: T3
    type: manual
"#;

/// Creates an empty project directory.
pub fn setup_project() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Writes the default catalog file of a project.
pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    write_file(dir, "test_list.yaml", content)
}

/// Writes the default results artifact of a project.
pub fn write_results(dir: &Path, content: &str) -> PathBuf {
    write_file(dir, "result_test_auto.json", content)
}

/// A suite command that prints one libtest summary line and exits with `code`.
pub fn fake_suite(passed: u64, failed: u64, code: i32) -> String {
    let verdict = if failed == 0 { "ok" } else { "FAILED" };
    format!(
        "sh -c 'echo \"test result: {verdict}. {passed} passed; {failed} failed; 0 ignored; 0 measured; 0 filtered out\"; exit {code}'"
    )
}

/// The binary under test, with English output and no colors.
pub fn catalog_runner(project_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("catalog-runner").expect("binary should be built");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--lang")
        .arg("en")
        .arg("--project-dir")
        .arg(project_dir);
    cmd
}

/// Copies `tests/sample_project` into a fresh temporary directory.
pub fn copy_sample_project() -> TempDir {
    let temp_dir = setup_project();
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/sample_project");
    for file in ["Cargo.toml", "src/lib.rs", "test_list.yaml"] {
        let content = fs::read_to_string(source.join(file)).expect("Failed to read sample project");
        write_file(temp_dir.path(), file, &content);
    }
    temp_dir
}

/// Reads back the results artifact written by `generate`.
pub fn read_artifact(path: &Path) -> ResultsArtifact {
    let content = fs::read_to_string(path).expect("Failed to read results artifact");
    serde_json::from_str(&content).expect("Results artifact should be valid JSON")
}
