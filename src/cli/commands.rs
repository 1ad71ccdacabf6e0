//! # Commands Module / 命令模块
//!
//! One module per subcommand, plus the options every subcommand shares.
//!
//! 每个子命令一个模块，以及所有子命令共享的选项。

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::config::{RunnerConfig, resolve_config};
use crate::infra::t;

pub mod generate;
pub mod init;
pub mod report;

/// Global options, available on every subcommand.
/// 全局选项，可用于每个子命令。
#[derive(Debug, Clone)]
pub struct CommonArgs {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub project_dir: PathBuf,
}

impl CommonArgs {
    /// Loads the configuration and switches the output language.
    ///
    /// `--lang` wins over the `language` key of the configuration file.
    /// Returns the configuration together with the locale actually in use.
    ///
    /// 加载配置并切换输出语言。`--lang` 优先于配置文件中的 `language` 键。
    /// 返回配置以及实际使用的语言环境。
    pub fn load(&self) -> Result<(RunnerConfig, String)> {
        let explicit = self.config.as_deref();
        let config = resolve_config(explicit, &self.project_dir);

        // The configuration may name the language, so an error here is reported
        // in the language of the flag (or English).
        let requested = match (&self.lang, &config) {
            (Some(lang), _) => lang.as_str(),
            (None, Ok(config)) => config.language.as_str(),
            (None, Err(_)) => "en",
        };
        let locale = crate::init_locale(requested);

        let config = config.with_context(|| t!("config_failed", locale = &locale).to_string())?;
        tracing::debug!(?config, %locale, "configuration loaded");
        Ok((config, locale))
    }
}
