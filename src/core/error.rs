//! # Error Types / 错误类型
//!
//! Typed failures for loading the two pipeline inputs. Command code wraps
//! these in `anyhow` with localized context.
//!
//! 加载流水线两个输入时的类型化错误。命令层代码会用 `anyhow` 包装并附加本地化上下文。

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a test catalog.
/// 加载测试目录时产生的错误。
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist. Fatal for the report, tolerated by the generator.
    /// 目录文件不存在。对报告是致命错误，生成器则会容忍。
    #[error("test catalog not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read test catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("test catalog {} is not valid YAML", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but is neither a list of tests nor a mapping with a `tests` list.
    /// 文档可以解析，但既不是测试列表，也不是包含 `tests` 列表的映射。
    #[error("unexpected format in test catalog {}: {detail}", path.display())]
    Malformed { path: PathBuf, detail: String },
}

/// Errors raised while loading a results artifact.
/// 加载结果产物时产生的错误。
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read results artifact {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("results artifact {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
