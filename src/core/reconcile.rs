//! # Reconciliation Module / 核对模块
//!
//! Joins the test catalog with the results index and classifies every catalog
//! entry into exactly one bucket: passed, failed, not found or manual.
//! The join key is the entry identifier, compared by exact equality.
//!
//! 将测试目录与结果索引连接，并把每个目录条目归入且仅归入一个类别：
//! 通过、失败、未找到或手动。连接键是条目标识符，按精确相等比较。

use serde::Serialize;

use crate::core::catalog::{Catalog, CatalogEntry};
use crate::core::models::ResultsIndex;

/// Classification of a single catalog entry.
/// 单个目录条目的分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// The recorded status normalized to `passed`. / 记录的状态规范化为 `passed`。
    Passed,
    /// A record exists with any other status. / 存在记录，但状态为其他值。
    Failed,
    /// An automated entry with no record. / 没有记录的自动化条目。
    NotFound,
    /// A manual entry; results are never consulted. / 手动条目；从不查询结果。
    Manual,
}

impl Outcome {
    /// Stable identifier used for CSS classes and locale keys.
    pub fn key(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::NotFound => "not_found",
            Outcome::Manual => "manual",
        }
    }
}

/// One report line: identifier, display type and classification.
/// 报告中的一行：标识符、显示类型和分类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub display_type: String,
    pub outcome: Outcome,
}

/// Per-bucket counts of a reconciliation.
/// 核对结果的分类计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub not_found: usize,
    pub manual: usize,
}

impl ReportSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Manual => self.manual += 1,
        }
    }

    /// Number of classified entries. Entries skipped for lack of an identifier are not counted.
    /// 已分类条目的数量。因缺少标识符而被跳过的条目不计入。
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.not_found + self.manual
    }

    /// Entries that are either passed or waiting on a manual run.
    pub fn passed_or_manual(&self) -> usize {
        self.passed + self.manual
    }

    /// Share of `count` in the total, in percent, rounded to one decimal.
    /// `None` when nothing was classified.
    ///
    /// `count` 在总数中所占的百分比，保留一位小数。没有任何分类条目时为 `None`。
    pub fn percentage(&self, count: usize) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| rounded_percentage(count, total))
    }
}

/// `count / total * 100`, rounded to one decimal, half to even on the exact binary value.
///
/// Rounding goes through the one-decimal display so the value always matches what
/// the report prints. A `total` of zero yields NaN; use [`ReportSummary::percentage`]
/// to guard against it.
pub fn rounded_percentage(count: usize, total: usize) -> f64 {
    let raw = count as f64 / total as f64 * 100.0;
    format!("{raw:.1}").parse().unwrap_or(raw)
}

/// The full outcome of reconciling a catalog with a results index.
/// 目录与结果索引核对的完整结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

/// Classifies one catalog entry against the results.
///
/// Manual entries are classified by type alone. Every other type, including
/// unrecognized ones, goes through the results lookup.
///
/// 根据结果对一个目录条目进行分类。手动条目只根据类型分类。
/// 其他所有类型（包括无法识别的类型）都会进行结果查找。
pub fn classify(entry: &CatalogEntry, id: &str, results: &ResultsIndex) -> Outcome {
    if entry.is_manual() {
        return Outcome::Manual;
    }
    match results.get(id) {
        None => Outcome::NotFound,
        Some(status) if status.is_passed() => Outcome::Passed,
        Some(_) => Outcome::Failed,
    }
}

/// Reconciles every catalog entry, in catalog order.
/// Entries without an identifier are dropped silently.
///
/// 按目录顺序核对每个目录条目。没有标识符的条目会被静默丢弃。
pub fn reconcile(catalog: &Catalog, results: &ResultsIndex) -> Reconciliation {
    let mut reconciliation = Reconciliation::default();

    for entry in catalog.entries() {
        let Some(id) = entry.id.as_deref() else {
            continue;
        };
        let outcome = classify(entry, id, results);
        reconciliation.summary.record(outcome);
        reconciliation.rows.push(ReportRow {
            id: id.to_string(),
            display_type: entry.display_type().to_string(),
            outcome,
        });
    }

    reconciliation
}
