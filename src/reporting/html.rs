//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a reconciliation as a standalone HTML page with summary
//! tiles for every bucket and one table row per catalog entry.
//!
//! 此模块将核对结果渲染为独立的 HTML 页面，每个类别有一个摘要卡片，
//! 每个目录条目对应表格中的一行。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::reconcile::{Outcome, Reconciliation};
use crate::infra::t;
use crate::reporting::console::status_text;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

fn summary_tile(count: usize, percent: Option<f64>, label: &str, class: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) "-text" } { (count) }
            span class="label" { (label) }
            @if let Some(percent) = percent {
                span class="percent" { (format!("{percent:.1}%")) }
            }
        }
    }
}

/// Renders the HTML page for a reconciliation.
///
/// # Arguments / 参数
/// * `reconciliation` - The classified catalog entries and their counts
///                      已分类的目录条目及其计数
/// * `locale` - The locale to use for internationalization
///              用于国际化的语言环境
/// * `generated_at` - Timestamp shown in the page footer
///                    页脚中显示的时间戳
pub fn render_html_report(
    reconciliation: &Reconciliation,
    locale: &str,
    generated_at: DateTime<Local>,
) -> String {
    let summary = &reconciliation.summary;
    let total = summary.total();
    let total_label = t!("html_report.summary.total", locale = locale);
    let buckets = [
        (summary.passed, t!("html_report.summary.passed", locale = locale), Outcome::Passed),
        (summary.failed, t!("html_report.summary.failed", locale = locale), Outcome::Failed),
        (
            summary.not_found,
            t!("html_report.summary.not_found", locale = locale),
            Outcome::NotFound,
        ),
        (summary.manual, t!("html_report.summary.manual", locale = locale), Outcome::Manual),
    ];
    let status_header = t!("html_report.table.header.status", locale = locale);
    let generated_at = t!(
        "html_report.generated_at",
        locale = locale,
        time = generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                div class="summary-container" {
                    (summary_tile(total, None, &total_label, "total"))
                    @for (count, label, outcome) in &buckets {
                        (summary_tile(*count, summary.percentage(*count), label, outcome.key()))
                    }
                }
                @if reconciliation.rows.is_empty() {
                    p class="empty" { (t!("html_report.empty", locale = locale)) }
                } @else {
                    table {
                        thead {
                            tr {
                                th { (t!("html_report.table.header.id", locale = locale)) }
                                th { (t!("html_report.table.header.type", locale = locale)) }
                                th class="status-col" { (status_header) }
                            }
                        }
                        tbody {
                            @for row in &reconciliation.rows {
                                tr {
                                    td { (row.id) }
                                    td { (row.display_type) }
                                    td class="status-col" {
                                        div class={ "status-cell status-" (row.outcome.key()) } {
                                            (status_text(row.outcome, locale))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                footer {
                    (generated_at)
                }
            }
        }
    };

    markup.into_string()
}

/// Writes the HTML report for a reconciliation to `output_path`.
///
/// # Errors / 错误
/// Returns an error if the file cannot be written.
/// 如果无法写入文件，则返回错误。
pub fn generate_html_report(
    reconciliation: &Reconciliation,
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let page = render_html_report(reconciliation, locale, Local::now());
    fs::write(output_path, page)
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))?;
    Ok(())
}
