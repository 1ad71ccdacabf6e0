//! # Catalog Runner Library / Catalog Runner 库
//!
//! This library provides the core functionality for the Catalog Runner tool,
//! which runs a project's automated test suite, records the outcome against a
//! declarative YAML test catalog, and reconciles the catalog with the recorded
//! results in a human-readable report.
//!
//! 此库为 Catalog Runner 工具提供核心功能：
//! 运行项目的自动化测试套件，将结果与声明式 YAML 测试目录对照记录，
//! 并以易读的报告形式对目录与记录结果进行核对。
//!
//! ## Modules / 模块
//!
//! - `core` - Catalog parsing, result models, artifact generation and reconciliation
//! - `infra` - Infrastructure services like the test harness and file system operations
//! - `reporting` - Console and HTML rendering of reconciliation reports
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 目录解析、结果模型、产物生成与核对
//! - `infra` - 基础设施服务，如测试执行器和文件系统操作
//! - `reporting` - 核对报告的控制台与 HTML 渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::catalog;
pub use core::config;
pub use core::generator;
pub use core::models;
pub use core::reconcile;

/// Resolves the output language against the bundled locales.
///
/// The requested locale is matched in full first (e.g. "zh-CN"), then by its
/// language part only (e.g. "fr" from "fr-FR"), and finally falls back to "en".
/// The resolved language is installed as the current `rust-i18n` locale and returned.
///
/// 根据内置的语言包解析输出语言。
/// 首先完整匹配（例如 "zh-CN"），然后只匹配语言部分（例如 "fr-FR" 中的 "fr"），
/// 最后回退到 "en"。解析出的语言会被设置为当前 `rust-i18n` 语言并返回。
pub fn init_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
