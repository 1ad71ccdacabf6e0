//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders a reconciliation as console text: one line per catalog
//! entry followed by a summary with counts and percentages.
//!
//! 此模块将核对结果渲染为控制台文本：每个目录条目一行，
//! 随后是包含计数和百分比的摘要。

use colored::*;
use std::fmt;
use std::path::Path;

use crate::core::reconcile::{Outcome, Reconciliation, ReportRow, ReportSummary};
use crate::infra::t;

/// Localized status text for an outcome.
/// 某个分类的本地化状态文本。
pub fn status_text(outcome: Outcome, locale: &str) -> String {
    match outcome {
        Outcome::Passed => t!("report.status_passed", locale = locale),
        Outcome::Failed => t!("report.status_failed", locale = locale),
        Outcome::NotFound => t!("report.status_not_found", locale = locale),
        Outcome::Manual => t!("report.status_manual", locale = locale),
    }
    .to_string()
}

fn paint(text: &str, outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Passed => text.green(),
        Outcome::Failed => text.red(),
        Outcome::NotFound => text.yellow(),
        Outcome::Manual => text.cyan(),
    }
}

fn row_line(row: &ReportRow, status: impl fmt::Display) -> String {
    format!("{} | {} | {}", row.id, row.display_type, status)
}

/// Formats one report line: `<id> | <display type> | <status>`.
pub fn format_row(row: &ReportRow, locale: &str) -> String {
    row_line(row, status_text(row.outcome, locale))
}

fn no_tests_line(catalog_path: &Path, locale: &str) -> String {
    t!("report.no_tests", locale = locale, path = catalog_path.display()).to_string()
}

/// Summary lines for a non-empty reconciliation, banner included.
///
/// Returns `None` when nothing was classified, so no percentage is ever computed
/// over a zero total.
///
/// 非空核对结果的摘要行（包括标题）。没有任何分类条目时返回 `None`，
/// 因此不会在总数为零时计算百分比。
pub fn summary_lines(summary: &ReportSummary, locale: &str) -> Option<Vec<String>> {
    if summary.total() == 0 {
        return None;
    }

    let percent = |count: usize| format!("{:.1}", summary.percentage(count).unwrap_or(0.0));
    let passed_or_manual = summary.passed_or_manual();

    Some(vec![
        t!("report.summary_banner", locale = locale).to_string(),
        t!("report.summary_total", locale = locale, count = summary.total()).to_string(),
        t!(
            "report.summary_passed",
            locale = locale,
            count = summary.passed,
            percent = percent(summary.passed)
        )
        .to_string(),
        t!(
            "report.summary_failed",
            locale = locale,
            count = summary.failed,
            percent = percent(summary.failed)
        )
        .to_string(),
        t!(
            "report.summary_not_found",
            locale = locale,
            count = summary.not_found,
            percent = percent(summary.not_found)
        )
        .to_string(),
        t!(
            "report.summary_manual",
            locale = locale,
            count = summary.manual,
            percent = percent(summary.manual)
        )
        .to_string(),
        t!(
            "report.summary_passed_or_manual",
            locale = locale,
            count = passed_or_manual,
            percent = percent(passed_or_manual)
        )
        .to_string(),
    ])
}

/// Renders the full report as plain text.
///
/// The output depends only on its inputs, so rendering the same catalog and
/// artifact twice gives byte-identical text.
///
/// # Output Format / 输出格式
/// ```text
/// T1 | auto | ✅ Passed
/// T2 | manual | 🫱 Manual test needed
///
/// ----- Summary -----
/// Number of tests: 2
/// ✅ Passed: 1 (50.0%)
/// ❌ Failed: 0 (0.0%)
/// Not found: 0 (0.0%)
/// 🫱 Manual: 1 (50.0%)
/// ✅ Passed + 🫱 Manual: 2 (100.0%)
/// ```
///
/// 以纯文本形式渲染完整报告。输出只取决于输入，因此对相同的目录和产物渲染两次，
/// 得到的文本逐字节相同。
pub fn render_report(
    reconciliation: &Reconciliation,
    catalog_path: &Path,
    locale: &str,
) -> String {
    let mut out = String::new();

    for row in &reconciliation.rows {
        out.push_str(&format_row(row, locale));
        out.push('\n');
    }

    match summary_lines(&reconciliation.summary, locale) {
        Some(lines) => {
            out.push('\n');
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
        }
        None => {
            out.push_str(&no_tests_line(catalog_path, locale));
            out.push('\n');
        }
    }

    out
}

/// Prints the report to stdout, with statuses colored when stdout is a terminal.
/// The printed text is otherwise identical to [`render_report`].
///
/// 将报告打印到 stdout；当 stdout 是终端时状态会带颜色。其余文本与 [`render_report`] 相同。
pub fn print_report(reconciliation: &Reconciliation, catalog_path: &Path, locale: &str) {
    for row in &reconciliation.rows {
        let status = status_text(row.outcome, locale);
        println!("{}", row_line(row, paint(&status, row.outcome)));
    }

    match summary_lines(&reconciliation.summary, locale) {
        Some(lines) => {
            println!();
            let mut lines = lines.into_iter();
            if let Some(banner) = lines.next() {
                println!("{}", banner.as_str().bold());
            }
            for line in lines {
                println!("{line}");
            }
        }
        None => println!("{}", no_tests_line(catalog_path, locale).as_str().yellow()),
    }
}
