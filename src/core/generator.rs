//! # Artifact Generator Module / 产物生成模块
//!
//! Turns one suite outcome and the test catalog into the results artifact.
//! The suite is run as a single opaque unit, so its verdict is broadcast to every
//! automated catalog entry: the artifact does not say which individual test failed.
//!
//! 将一次套件运行结果与测试目录转换为结果产物。
//! 套件作为一个不透明的整体运行，因此其结论会广播到每个自动化目录条目：
//! 产物不会指出具体是哪个测试失败。

use crate::core::catalog::Catalog;
use crate::core::models::{ResultsArtifact, SuiteOutcome, TestResultRecord};

/// Builds the results artifact for a suite run.
///
/// Every automated catalog entry with an identifier gets one record carrying the
/// global status, in catalog order. Manual and untyped entries get none.
///
/// 为一次套件运行构建结果产物。每个带有标识符的自动化目录条目都会按目录顺序
/// 得到一条携带全局状态的记录。手动条目和无类型条目不会产生记录。
pub fn build_artifact(catalog: &Catalog, outcome: SuiteOutcome) -> ResultsArtifact {
    let status = outcome.global_status();

    let tests = catalog
        .automated_ids()
        .into_iter()
        .map(|id| TestResultRecord {
            test_case_id: id.to_string(),
            status: status.as_str().to_string(),
        })
        .collect();

    ResultsArtifact {
        total_tests: outcome.tests_run,
        failures: outcome.failures,
        errors: Vec::new(),
        success: outcome.success(),
        tests,
    }
}
