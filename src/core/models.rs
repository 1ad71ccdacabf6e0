//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures exchanged between the generator and
//! the report: the aggregate outcome of a suite run, the results artifact written
//! to disk, and the index the report builds from that artifact.
//!
//! 此模块定义了生成器与报告之间交换的数据结构：
//! 测试套件运行的汇总结果、写入磁盘的结果产物，以及报告从该产物构建的索引。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::core::catalog::resolve_alias;

/// Keys tried, in order, to find a result record's test case identifier.
/// 按顺序尝试查找结果记录测试用例标识符的键。
pub const RESULT_ID_ALIASES: [&str; 3] = ["test_case_id", "id", "test_id"];

/// Aggregate counts reported by the test harness for one full suite run.
/// 测试执行器对一次完整套件运行报告的汇总计数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteOutcome {
    /// Number of tests that ran. / 运行的测试数量。
    pub tests_run: u64,
    /// Number of failed tests, errors included. / 失败的测试数量，包括错误。
    pub failures: u64,
}

impl SuiteOutcome {
    pub fn new(tests_run: u64, failures: u64) -> Self {
        Self { tests_run, failures }
    }

    /// The single verdict applied to every automated catalog entry.
    /// 应用于每个自动化目录条目的唯一结论。
    pub fn global_status(&self) -> GlobalStatus {
        if self.failures == 0 {
            GlobalStatus::Passed
        } else {
            GlobalStatus::Failed
        }
    }

    /// Number of successful tests: everything that ran minus the failures.
    pub fn success(&self) -> u64 {
        if self.failures == 0 {
            self.tests_run
        } else {
            self.tests_run.saturating_sub(self.failures)
        }
    }
}

/// Pass/fail verdict for a whole suite run.
/// 整个套件运行的通过/失败结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalStatus {
    Passed,
    Failed,
}

impl GlobalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalStatus::Passed => "passed",
            GlobalStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for GlobalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the results artifact.
/// 结果产物中的一行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResultRecord {
    pub test_case_id: String,
    /// Raw status text. The generator only writes `passed` or `failed`,
    /// but hand-edited artifacts may carry any synonym.
    /// 原始状态文本。生成器只会写入 `passed` 或 `failed`，但手动编辑的产物可能包含任意同义词。
    pub status: String,
}

/// The results artifact (`result_test_auto.json`), a snapshot of one suite run.
///
/// `success` always equals `total_tests` minus `failures`. The artifact is replaced
/// as a whole on every generator run, never merged.
///
/// 结果产物（`result_test_auto.json`），一次套件运行的快照。
/// `success` 始终等于 `total_tests` 减去 `failures`。每次生成都会整体替换产物，从不合并。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsArtifact {
    pub total_tests: u64,
    pub failures: u64,
    /// Always empty: errors are folded into `failures`.
    /// 始终为空：错误已计入 `failures`。
    #[serde(default)]
    pub errors: Vec<Value>,
    pub success: u64,
    #[serde(default)]
    pub tests: Vec<TestResultRecord>,
}

impl ResultsArtifact {
    /// Serializes the artifact as four-space indented JSON.
    /// Non-ASCII characters are written verbatim, never escaped.
    ///
    /// 将产物序列化为四空格缩进的 JSON。非 ASCII 字符按原样写入，不做转义。
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// A result status folded into the vocabulary the report understands.
/// 折叠为报告可理解词汇的结果状态。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedStatus {
    Passed,
    Failed,
    /// Any other status, kept as written (`unknown` when missing or empty).
    /// 其他任何状态，按原样保留（缺失或为空时为 `unknown`）。
    Other(String),
}

impl NormalizedStatus {
    /// Folds a raw status into `passed`, `failed` or itself.
    ///
    /// Matching is exact: `ok` and `OK` mean passed, but `Ok` or `PASSED` do not.
    ///
    /// 将原始状态折叠为 `passed`、`failed` 或其本身。匹配是精确的：
    /// `ok` 和 `OK` 表示通过，但 `Ok` 或 `PASSED` 不是。
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("passed" | "success" | "ok" | "OK") => NormalizedStatus::Passed,
            Some("failed" | "failure") => NormalizedStatus::Failed,
            Some(other) if !other.is_empty() => NormalizedStatus::Other(other.to_string()),
            _ => NormalizedStatus::Other("unknown".to_string()),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, NormalizedStatus::Passed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            NormalizedStatus::Passed => "passed",
            NormalizedStatus::Failed => "failed",
            NormalizedStatus::Other(s) => s,
        }
    }
}

/// Renders a JSON scalar as text. Empty strings, zero, booleans, nulls and collections yield `None`.
fn json_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Lookup table from test case identifier to normalized status, built from an artifact.
/// 从产物构建的、由测试用例标识符到规范化状态的查找表。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsIndex {
    statuses: HashMap<String, NormalizedStatus>,
}

impl ResultsIndex {
    /// Builds the index from a parsed artifact document.
    ///
    /// The document is read leniently: a missing `tests` list gives an empty index,
    /// records without any identifier alias are ignored, and a later record for the
    /// same identifier replaces an earlier one.
    ///
    /// 从已解析的产物文档构建索引。文档以宽松方式读取：缺少 `tests` 列表时得到空索引，
    /// 没有任何标识符别名的记录会被忽略，同一标识符的后续记录会替换之前的记录。
    pub fn from_json(document: &Value) -> Self {
        let mut statuses = HashMap::new();
        let records = document
            .get("tests")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for record in records {
            let Some(id) = resolve_alias(&RESULT_ID_ALIASES, |key| {
                record.get(key).and_then(json_scalar_text)
            }) else {
                continue;
            };
            let raw = record.get("status").and_then(json_scalar_text);
            statuses.insert(id, NormalizedStatus::normalize(raw.as_deref()));
        }

        Self { statuses }
    }

    pub fn get(&self, id: &str) -> Option<&NormalizedStatus> {
        self.statuses.get(id)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
