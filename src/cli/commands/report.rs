//! # Report Command Module / 报告命令模块
//!
//! Joins the test catalog with the last results artifact and prints one line per
//! catalog entry followed by the summary. Optionally writes the same report as HTML.
//!
//! 将测试目录与最近一次的结果产物进行连接，为每个目录条目打印一行，随后打印摘要。
//! 还可以选择将同一报告写成 HTML。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::cli::commands::CommonArgs;
use crate::core::catalog::load_catalog;
use crate::core::models::ResultsIndex;
use crate::core::reconcile::{Reconciliation, reconcile};
use crate::infra::fs::load_results_index;
use crate::infra::t;
use crate::reporting::{generate_html_report, print_report};

/// Options of the `report` subcommand. Paths given here are used as-is.
/// `report` 子命令的选项。此处给出的路径按原样使用。
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub common: CommonArgs,
    pub catalog: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub html: Option<PathBuf>,
}

/// Executes the `report` command.
///
/// The catalog must exist. A missing results artifact only degrades the report:
/// every automated entry then shows as not found.
///
/// 执行 `report` 命令。目录必须存在。结果产物缺失只会降级报告：
/// 此时每个自动化条目都显示为未找到。
pub fn execute(options: ReportOptions) -> Result<Reconciliation> {
    let (config, locale) = options.common.load()?;
    let project_dir = &options.common.project_dir;

    let catalog_path = options
        .catalog
        .unwrap_or_else(|| config.catalog_path(project_dir));
    let results_path = options
        .results
        .unwrap_or_else(|| config.results_path(project_dir));

    let catalog = load_catalog(&catalog_path).with_context(|| {
        t!("report.catalog_failed", locale = &locale, path = catalog_path.display()).to_string()
    })?;

    println!(
        "{}",
        t!("report.reading_results", locale = &locale, path = results_path.display())
    );
    let results = load_results_index(&results_path).with_context(|| {
        t!("report.results_failed", locale = &locale, path = results_path.display()).to_string()
    })?;
    let results = results.unwrap_or_else(|| {
        tracing::warn!(path = %results_path.display(), "results artifact not found");
        println!(
            "{}",
            t!("report.missing_results", locale = &locale, path = results_path.display()).yellow()
        );
        ResultsIndex::default()
    });
    println!("{}\n", t!("report.results_ok", locale = &locale));

    let reconciliation = reconcile(&catalog, &results);
    print_report(&reconciliation, &catalog_path, &locale);

    if let Some(html_path) = &options.html {
        println!(
            "\n{}",
            t!("report.html_writing", locale = &locale, path = html_path.display())
        );
        // The console report is already out; a failed page does not fail the command.
        if let Err(e) = generate_html_report(&reconciliation, html_path, &locale) {
            eprintln!(
                "{} {e:#}",
                t!("report.html_failed", locale = &locale).red()
            );
        }
    }

    Ok(reconciliation)
}
