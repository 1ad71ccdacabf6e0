//! # Pipeline Integration Tests / 流水线集成测试
//!
//! End-to-end runs of `generate` followed by `report`, with a scripted suite for
//! the fast cases and a real `cargo test` on `tests/sample_project`.
//!
//! `generate` 与 `report` 的端到端运行：快速场景使用脚本化的套件，
//! 另外在 `tests/sample_project` 上运行真实的 `cargo test`。

use assert_cmd::prelude::*;
use catalog_runner::catalog::load_catalog;
use catalog_runner::infra::fs::load_results_index;
use catalog_runner::reconcile::reconcile;
use catalog_runner::reporting::render_report;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

mod common;
use common::*;

#[cfg(all(test, unix))]
mod generate_tests {
    use super::*;

    #[test]
    fn test_generate_writes_artifact_for_automated_entries() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(4, 0, 0))
            .assert()
            .success()
            .stdout(predicate::str::contains("2 automated test(s)"))
            .stdout(predicate::str::contains("Automated test results saved to"));

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 4);
        assert_eq!(artifact.failures, 0);
        assert_eq!(artifact.success, 4);
        let ids: Vec<_> = artifact.tests.iter().map(|t| t.test_case_id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2"]);
        assert!(artifact.tests.iter().all(|t| t.status == "passed"));
    }

    #[test]
    fn test_failing_suite_still_exits_successfully() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(3, 1, 101))
            .assert()
            .success();

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 4);
        assert_eq!(artifact.failures, 1);
        assert_eq!(artifact.success, 3);
        assert!(artifact.tests.iter().all(|t| t.status == "failed"));
    }

    #[test]
    fn test_generate_without_catalog_writes_empty_test_list() {
        let project = setup_project();

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(1, 0, 0))
            .assert()
            .success()
            .stdout(predicate::str::contains("No test catalog at"));

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 1);
        assert!(artifact.tests.is_empty());
    }

    #[test]
    fn test_generate_replaces_previous_artifact() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);
        write_results(
            project.path(),
            r#"{"total_tests": 9, "failures": 0, "errors": [], "success": 9, "tests": [{"test_case_id": "OLD", "status": "passed"}]}"#,
        );

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(2, 0, 0))
            .assert()
            .success();

        let text = fs::read_to_string(project.path().join("result_test_auto.json")).unwrap();
        assert!(!text.contains("OLD"));
        assert!(text.starts_with("{\n    \"total_tests\": 2,"));
    }

    #[test]
    fn test_generate_with_malformed_catalog_fails() {
        let project = setup_project();
        write_catalog(project.path(), "just a string");

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(1, 0, 0))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load the test catalog"));
        assert!(!project.path().join("result_test_auto.json").exists());
    }

    #[test]
    fn test_suite_that_cannot_start_fails() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg("this_command_definitely_does_not_exist_12345")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to run the test suite"));
    }

    #[test]
    fn test_suite_from_config_and_custom_paths() {
        let project = setup_project();
        write_file(project.path(), "qa/catalog.yaml", MIXED_CATALOG);
        write_file(
            project.path(),
            "CatalogRunner.toml",
            &format!(
                "catalog = \"qa/catalog.yaml\"\nresults = \"out/results.json\"\nsuite = {:?}\n",
                fake_suite(2, 0, 0)
            ),
        );

        catalog_runner(project.path()).arg("generate").assert().success();

        let artifact = read_artifact(&project.path().join("out/results.json"));
        assert_eq!(artifact.tests.len(), 2);
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_report_classifies_every_entry() {
        let project = setup_project();
        write_catalog(
            project.path(),
            r#"
tests:
  - id: T1
    type: auto
  - id: T2
    type: auto
  - id: T3
    type: manual
  - id: T4
    type: auto-unittest
  - title: no identifier
    type: auto
"#,
        );
        write_results(
            project.path(),
            r#"{"tests": [
                {"test_case_id": "T1", "status": "passed"},
                {"test_case_id": "T2", "status": "failed"},
                {"test_case_id": "T3", "status": "failed"}
            ]}"#,
        );

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .success()
            .stdout(predicate::str::contains("OK"))
            .stdout(predicate::str::contains("T1 | auto | ✅ Passed\n"))
            .stdout(predicate::str::contains("T2 | auto | ❌ Failed\n"))
            .stdout(predicate::str::contains("T3 | manual | 🫱 Manual test needed\n"))
            .stdout(predicate::str::contains("T4 | auto | \u{FE0F}Not found\n"))
            .stdout(predicate::str::contains("Number of tests: 4\n"))
            .stdout(predicate::str::contains("✅ Passed: 1 (25.0%)\n"))
            .stdout(predicate::str::contains("✅ Passed + 🫱 Manual: 2 (50.0%)\n"))
            .stdout(predicate::str::contains("no identifier").not());
    }

    #[test]
    fn test_report_without_artifact_warns_and_continues() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .success()
            .stdout(predicate::str::contains("Warning: file"))
            .stdout(predicate::str::contains("T1 | auto | \u{FE0F}Not found"))
            .stdout(predicate::str::contains("\u{FE0F}Not found: 2 (66.7%)"))
            .stdout(predicate::str::contains("🫱 Manual: 1 (33.3%)"));
    }

    #[test]
    fn test_report_without_catalog_fails() {
        let project = setup_project();
        catalog_runner(project.path())
            .arg("report")
            .assert()
            .failure()
            .stderr(predicate::str::contains("test catalog not found"));
    }

    #[test]
    fn test_report_with_invalid_artifact_fails() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);
        write_results(project.path(), "{ not json");

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load the results artifact"));
    }

    #[test]
    fn test_report_on_empty_catalog() {
        let project = setup_project();
        write_catalog(project.path(), "tests: []\n");

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .success()
            .stdout(predicate::str::contains("No tests found in"))
            .stdout(predicate::str::contains("%").not());
    }

    #[test]
    fn test_report_twice_prints_the_same() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);
        write_results(
            project.path(),
            r#"{"tests": [{"test_case_id": "T1", "status": "ok"}]}"#,
        );

        let first = catalog_runner(project.path()).arg("report").output().unwrap();
        let second = catalog_runner(project.path()).arg("report").output().unwrap();
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }

    /// The text the binary prints for a project, rebuilt in-process.
    fn expected_report(project_dir: &Path) -> String {
        let catalog_path = project_dir.join("test_list.yaml");
        let catalog = load_catalog(&catalog_path).unwrap();
        let results = load_results_index(&project_dir.join("result_test_auto.json"))
            .unwrap()
            .unwrap_or_default();
        render_report(&reconcile(&catalog, &results), &catalog_path, "en")
    }

    #[test]
    fn test_printed_report_matches_rendered_report() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);
        write_results(
            project.path(),
            r#"{"tests": [{"test_case_id": "T1", "status": "passed"}, {"test_case_id": "T2", "status": "failed"}]}"#,
        );

        let output = catalog_runner(project.path()).arg("report").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.ends_with(&expected_report(project.path())), "{stdout}");
    }

    #[test]
    fn test_printed_empty_report_matches_rendered_report() {
        let project = setup_project();
        write_catalog(project.path(), "[]");

        let output = catalog_runner(project.path()).arg("report").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.ends_with(&expected_report(project.path())), "{stdout}");
    }

    #[test]
    fn test_report_writes_html() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);
        let html_path = project.path().join("report.html");

        catalog_runner(project.path())
            .arg("report")
            .arg("--html")
            .arg(&html_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Generating HTML report at"));

        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Test Catalog Report"));
        assert!(html.contains("status-manual"));
        assert!(html.contains("<td>T3</td>"));
    }

    #[test]
    fn test_html_failure_does_not_fail_report() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("report")
            .arg("--html")
            .arg(project.path().join("missing_dir/report.html"))
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to generate HTML report"));
    }
}

#[cfg(all(test, unix))]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_generate_then_report_with_scripted_suite() {
        let project = setup_project();
        write_catalog(project.path(), MIXED_CATALOG);

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg(fake_suite(5, 0, 0))
            .assert()
            .success();

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .success()
            .stdout(predicate::str::contains("T1 | auto | ✅ Passed"))
            .stdout(predicate::str::contains("T2 | auto | ✅ Passed"))
            .stdout(predicate::str::contains("T3 | manual | 🫱 Manual test needed"))
            .stdout(predicate::str::contains("✅ Passed + 🫱 Manual: 3 (100.0%)"));
    }

    #[test]
    fn test_real_cargo_test_on_sample_project() {
        let project = copy_sample_project();

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg("cargo test --offline")
            .assert()
            .success();

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 2);
        assert_eq!(artifact.failures, 0);
        assert_eq!(artifact.tests.len(), 2);

        catalog_runner(project.path())
            .arg("report")
            .assert()
            .success()
            .stdout(predicate::str::contains("T1 | auto | ✅ Passed"));
    }

    #[test]
    fn test_real_cargo_test_failure_on_sample_project() {
        let project = copy_sample_project();

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg("cargo test --offline --features feature_test_fail")
            .assert()
            .success();

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 3);
        assert_eq!(artifact.failures, 1);
        assert_eq!(artifact.success, 2);
        assert!(artifact.tests.iter().all(|t| t.status == "failed"));
    }

    #[test]
    fn test_build_failure_on_sample_project() {
        let project = copy_sample_project();

        catalog_runner(project.path())
            .arg("generate")
            .arg("--suite")
            .arg("cargo test --offline --features feature_build_fail")
            .assert()
            .success();

        let artifact = read_artifact(&project.path().join("result_test_auto.json"));
        assert_eq!(artifact.total_tests, 0);
        assert_eq!(artifact.failures, 1);
        assert_eq!(artifact.success, 0);
    }
}
