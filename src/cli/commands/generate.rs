//! # Generate Command Module / 生成命令模块
//!
//! Runs the automated suite once and records its aggregate outcome against every
//! automated catalog entry.
//!
//! 运行一次自动化套件，并将汇总结果记录到每个自动化目录条目上。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::cli::commands::CommonArgs;
use crate::core::catalog::load_catalog_or_empty;
use crate::core::generator::build_artifact;
use crate::core::models::GlobalStatus;
use crate::infra::command::run_suite;
use crate::infra::fs::write_artifact;
use crate::infra::t;

/// Options of the `generate` subcommand. Paths given here are used as-is.
/// `generate` 子命令的选项。此处给出的路径按原样使用。
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub common: CommonArgs,
    pub catalog: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub suite: Option<String>,
}

/// Executes the `generate` command and returns the path of the written artifact.
///
/// A failing suite is a normal outcome: it is recorded in the artifact and the
/// command still succeeds. Only an unreadable catalog, a suite that cannot be
/// started, or an artifact that cannot be written make it fail.
///
/// 执行 `generate` 命令并返回写入的产物路径。
/// 套件失败是正常结果：它会被记录到产物中，命令本身仍然成功。
/// 只有目录无法读取、套件无法启动或产物无法写入时命令才会失败。
pub async fn execute(options: GenerateOptions) -> Result<PathBuf> {
    let (config, locale) = options.common.load()?;
    let project_dir = &options.common.project_dir;

    let catalog_path = options
        .catalog
        .unwrap_or_else(|| config.catalog_path(project_dir));
    let results_path = options
        .results
        .unwrap_or_else(|| config.results_path(project_dir));
    let suite = options.suite.unwrap_or(config.suite);

    if !catalog_path.exists() {
        println!(
            "{}",
            t!("generate.catalog_missing", locale = &locale, path = catalog_path.display()).yellow()
        );
    }
    let catalog = load_catalog_or_empty(&catalog_path).with_context(|| {
        t!("generate.catalog_failed", locale = &locale, path = catalog_path.display()).to_string()
    })?;
    println!(
        "{}",
        t!(
            "generate.automated_entries",
            locale = &locale,
            count = catalog.automated_ids().len(),
            path = catalog_path.display()
        )
    );

    println!(
        "{}",
        t!("generate.running_suite", locale = &locale, command = &suite).blue()
    );
    let (outcome, output) = run_suite(&suite, project_dir)
        .await
        .with_context(|| t!("generate.suite_failed", locale = &locale).to_string())?;
    if !output.trim().is_empty() {
        print!("{output}");
    }

    let finished = t!(
        "generate.suite_finished",
        locale = &locale,
        run = outcome.tests_run,
        failures = outcome.failures
    );
    if outcome.global_status() == GlobalStatus::Passed {
        println!("{}", finished.green());
    } else {
        println!("{}", finished.red());
    }

    let artifact = build_artifact(&catalog, outcome);
    write_artifact(&results_path, &artifact).with_context(|| {
        t!("generate.write_failed", locale = &locale, path = results_path.display()).to_string()
    })?;
    tracing::info!(
        path = %results_path.display(),
        tests = artifact.tests.len(),
        success = artifact.success,
        "results artifact written"
    );

    println!(
        "{}",
        t!("generate.saved", locale = &locale, path = results_path.display()).green()
    );
    Ok(results_path)
}
