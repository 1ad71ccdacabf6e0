//! # Configuration Module / 配置模块
//!
//! Loads the optional `CatalogRunner.toml` file. Every key has a default, so an
//! empty file (or no file at all) yields a working configuration.
//!
//! 加载可选的 `CatalogRunner.toml` 文件。每个键都有默认值，
//! 因此空文件（或根本没有文件）也能得到可用的配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory when `--config` is not given.
/// 未提供 `--config` 时在项目目录中查找的文件名。
pub const DEFAULT_CONFIG_FILE: &str = "CatalogRunner.toml";

/// Runner configuration, loaded from a TOML file.
/// 从 TOML 文件加载的运行器配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "fr", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "fr", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Path of the test catalog, relative to the project directory.
    /// 测试目录的路径，相对于项目目录。
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Path of the results artifact, relative to the project directory.
    /// 结果产物的路径，相对于项目目录。
    #[serde(default = "default_results")]
    pub results: PathBuf,

    /// Command that runs the whole automated suite. Shell-expanded, then split like a shell would.
    /// 运行整个自动化套件的命令。先进行 shell 展开，再按 shell 规则拆分。
    #[serde(default = "default_suite")]
    pub suite: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            catalog: default_catalog(),
            results: default_results(),
            suite: default_suite(),
        }
    }
}

impl RunnerConfig {
    /// Resolves the catalog path against the project directory.
    pub fn catalog_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.catalog)
    }

    /// Resolves the results artifact path against the project directory.
    pub fn results_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.results)
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_catalog() -> PathBuf {
    PathBuf::from("test_list.yaml")
}

fn default_results() -> PathBuf {
    PathBuf::from("result_test_auto.json")
}

fn default_suite() -> String {
    "cargo test".to_string()
}

/// Reads and parses a configuration file.
/// 读取并解析配置文件。
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads the configuration for a run.
///
/// An explicit path must exist. Without one, `CatalogRunner.toml` in the project
/// directory is used when present, and the defaults otherwise.
///
/// 加载一次运行的配置。显式指定的路径必须存在。未指定时，
/// 如果项目目录中存在 `CatalogRunner.toml` 则使用它，否则使用默认值。
pub fn resolve_config(explicit: Option<&Path>, project_dir: &Path) -> Result<RunnerConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let implicit = project_dir.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        tracing::debug!(path = %implicit.display(), "using config file from project directory");
        load_config(&implicit)
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(RunnerConfig::default())
    }
}
