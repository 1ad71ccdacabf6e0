//! # Init Command Module / 初始化命令模块
//!
//! This module creates a `CatalogRunner.toml` configuration through an interactive
//! wizard, and optionally a sample test catalog next to it.
//!
//! 此模块通过交互式向导创建 `CatalogRunner.toml` 配置文件，
//! 并可选择在其旁边创建一个示例测试目录。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the suite command and the two file locations
//! - **Non-interactive Mode**: Writes the defaults without asking anything
//! - **Overwrite Protection**: Existing files are kept unless confirmed or `--force` is given
//!
//! - **交互式向导**: 提示输入套件命令和两个文件位置
//! - **非交互模式**: 不询问任何问题，直接写入默认值
//! - **覆盖保护**: 除非确认或提供 `--force`，否则保留现有文件

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use crate::core::config::{DEFAULT_CONFIG_FILE, RunnerConfig};
use crate::infra::fs::write_atomic;
use crate::infra::t;

const CONFIG_HEADER: &str = "# Catalog Runner configuration / Catalog Runner 配置
# Paths are relative to the project directory. / 路径相对于项目目录。

";

/// Sample catalog written by `init`, one entry of each kind.
/// `init` 写入的示例目录，每种类型各一个条目。
pub const SAMPLE_CATALOG: &str = r#"# Test catalog / 测试目录
# type: auto or auto-unittest (covered by the test suite), manual (run by hand)
tests:
  - id: T1
    title: Home page lists the existing tasks
    type: auto
  - id: T2
    title: A task can be renamed
    type: auto-unittest
  - id: T3
    title: Task list renders correctly on a phone
    type: manual
"#;

/// Executes the `init` command in `project_dir`.
///
/// # Arguments
/// * `project_dir` - Directory receiving the configuration and the sample catalog
/// * `locale` - Language for prompts and messages
/// * `non_interactive` - Write the defaults without prompting
/// * `force` - Overwrite existing files without asking
pub fn execute(
    project_dir: &Path,
    locale: &str,
    non_interactive: bool,
    force: bool,
) -> Result<()> {
    let config_path = project_dir.join(DEFAULT_CONFIG_FILE);
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init.wizard_welcome", locale = locale).cyan().bold());
        println!("{}", t!("init.wizard_description", locale = locale));
    }

    if !may_write(&config_path, &theme, locale, non_interactive, force)? {
        return Ok(());
    }

    let mut config = RunnerConfig {
        language: locale.to_string(),
        ..RunnerConfig::default()
    };
    let mut write_sample = true;

    if !non_interactive {
        config.suite = Input::with_theme(&theme)
            .with_prompt(t!("init.suite_prompt", locale = locale))
            .default(config.suite)
            .interact_text()
            .context(t!("init.confirmation_failed", locale = locale).to_string())?;
        config.catalog = prompt_path(
            &theme,
            &t!("init.catalog_prompt", locale = locale),
            &config.catalog,
            locale,
        )?;
        config.results = prompt_path(
            &theme,
            &t!("init.results_prompt", locale = locale),
            &config.results,
            locale,
        )?;
        write_sample = Confirm::with_theme(&theme)
            .with_prompt(t!("init.sample_prompt", locale = locale))
            .default(true)
            .interact()
            .context(t!("init.confirmation_failed", locale = locale).to_string())?;
    }

    write_config(&config_path, &config, locale)?;

    if write_sample {
        let catalog_path = config.catalog_path(project_dir);
        if may_write(&catalog_path, &theme, locale, non_interactive, force)? {
            write_file(&catalog_path, SAMPLE_CATALOG, locale)?;
        }
    }

    println!("\n{}", t!("init.next_steps", locale = locale));
    Ok(())
}

/// Decides whether `path` may be (over)written, asking in interactive mode.
fn may_write(
    path: &Path,
    theme: &ColorfulTheme,
    locale: &str,
    non_interactive: bool,
    force: bool,
) -> Result<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    if non_interactive {
        println!("{}", t!("init.file_exists", locale = locale, path = path.display()).red());
        println!("{}", t!("init.use_force", locale = locale).yellow());
        return Ok(false);
    }

    let confirmation = Confirm::with_theme(theme)
        .with_prompt(t!("init.overwrite_prompt", locale = locale, path = path.display()))
        .default(false)
        .interact()
        .context(t!("init.confirmation_failed", locale = locale).to_string())?;
    if !confirmation {
        println!("{}", t!("init.aborted", locale = locale));
    }
    Ok(confirmation)
}

fn prompt_path(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &Path,
    locale: &str,
) -> Result<PathBuf> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(default.display().to_string())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = locale).to_string())?;
    Ok(PathBuf::from(answer))
}

/// Serializes the configuration and writes it to `path`.
/// 序列化配置并写入 `path`。
fn write_config(path: &Path, config: &RunnerConfig, locale: &str) -> Result<()> {
    let body =
        toml::to_string_pretty(config).context("Failed to serialize configuration to TOML")?;
    write_file(path, &format!("{CONFIG_HEADER}{body}"), locale)
}

fn write_file(path: &Path, content: &str, locale: &str) -> Result<()> {
    write_atomic(path, content.as_bytes()).with_context(|| {
        t!("init.write_failed", locale = locale, path = path.display()).to_string()
    })?;
    println!("{}", t!("init.written", locale = locale, path = path.display()).green());
    Ok(())
}
