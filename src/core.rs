//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Catalog Runner:
//! the test catalog, the results artifact model, configuration,
//! artifact generation and catalog/result reconciliation.
//!
//! 此模块包含 Catalog Runner 的核心功能：
//! 测试目录、结果产物模型、配置、产物生成以及目录与结果的核对。

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod reconcile;

// Re-exports
pub use catalog::{Catalog, CatalogEntry};
pub use config::RunnerConfig;
pub use models::{ResultsArtifact, SuiteOutcome};
pub use reconcile::{Reconciliation, reconcile};
