//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Catalog Runner,
//! including running the test harness, file system operations, and i18n support.
//!
//! 此模块为 Catalog Runner 提供基础设施服务，
//! 包括运行测试执行器、文件系统操作和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
