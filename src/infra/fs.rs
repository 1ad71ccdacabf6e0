//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system side of the pipeline: writing the results
//! artifact in one step and reading it back for the report.
//!
//! 此模块提供流水线的文件系统部分：一次性写入结果产物，并为报告读回它。

use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::core::error::ArtifactError;
use crate::core::models::{ResultsArtifact, ResultsIndex};

/// Replaces the content of `path` with `contents`.
///
/// The data is written to a temporary file in the same directory, then renamed over
/// the destination, so readers see either the old file or the new one in full.
///
/// # Arguments
/// * `path` - Destination file; its parent directory is created if needed
/// * `contents` - The complete new content
///
/// 用 `contents` 替换 `path` 的内容。数据先写入同一目录下的临时文件，
/// 再重命名覆盖目标文件，因此读取者看到的要么是完整的旧文件，要么是完整的新文件。
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut temp = tempfile::Builder::new()
        .prefix(".catalog_runner_")
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Writes the results artifact, overwriting any previous one.
/// 写入结果产物，覆盖之前的产物。
pub fn write_artifact(path: &Path, artifact: &ResultsArtifact) -> Result<()> {
    let mut json = artifact
        .to_pretty_json()
        .context("Failed to serialize results artifact")?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Loads the results index the report joins against.
///
/// Returns `Ok(None)` when the artifact does not exist; the caller decides how
/// loudly to degrade. The document is read leniently (see [`ResultsIndex::from_json`]).
///
/// 加载报告用于连接的结果索引。产物不存在时返回 `Ok(None)`，由调用方决定如何降级。
pub fn load_results_index(path: &Path) -> Result<Option<ResultsIndex>, ArtifactError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let index = ResultsIndex::from_json(&document);
    tracing::debug!(path = %path.display(), records = index.len(), "loaded results artifact");
    Ok(Some(index))
}
