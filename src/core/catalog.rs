//! # Test Catalog Module / 测试目录模块
//!
//! This module loads the human-authored test catalog (`test_list.yaml`) and
//! resolves every entry down to the two attributes the pipeline cares about:
//! its identifier and its normalized type.
//!
//! 此模块加载人工编写的测试目录（`test_list.yaml`），
//! 并将每个条目解析为流水线关心的两个属性：标识符和规范化后的类型。
//!
//! ## Accepted shapes / 支持的格式
//!
//! ```yaml
//! # A direct list of entries / 直接的条目列表
//! - id: T1
//!   type: auto
//! - numero: 12
//!   type: Manual
//! ```
//!
//! ```yaml
//! # A mapping holding the list under `tests` / 在 `tests` 键下保存列表的映射
//! tests:
//!   - test_case_id: T1
//!     type: auto-unittest
//! ```

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::CatalogError;

/// Keys tried, in order, to find an entry's identifier. The first present, non-empty value wins.
/// 按顺序尝试查找条目标识符的键。第一个存在且非空的值生效。
pub const ID_ALIASES: [&str; 4] = ["id", "test_case_id", "numero", "number"];

/// Key holding an entry's free-text type.
pub const TYPE_KEY: &str = "type";

/// Normalized types the harness executes.
/// 由测试执行器执行的规范化类型。
pub const AUTOMATED_TYPES: [&str; 2] = ["auto", "auto-unittest"];

/// Normalized type of entries that always need a human to run them.
pub const MANUAL_TYPE: &str = "manual";

/// Returns the first non-empty value produced by `lookup` for the given keys, in order.
///
/// Shared by the catalog and the results index so both sides of the join apply
/// the same precedence rules.
///
/// 按顺序返回 `lookup` 对给定键产生的第一个非空值。
/// 目录和结果索引共用此函数，保证连接两端使用相同的优先级规则。
pub fn resolve_alias<F>(aliases: &[&str], mut lookup: F) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    aliases
        .iter()
        .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
}

/// Renders a YAML scalar as identifier text.
/// Zero, booleans, nulls and collections never count as an identifier.
fn yaml_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// A single row of the test catalog, reduced to the attributes the pipeline uses.
/// 测试目录中的一行，仅保留流水线使用的属性。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The resolved identifier, `None` when no alias key holds a usable value.
    /// 解析出的标识符；若没有任何别名键包含可用值则为 `None`。
    pub id: Option<String>,
    /// The declared type, trimmed and lower-cased. Empty when absent.
    /// 声明的类型，已去除首尾空白并转为小写。缺失时为空字符串。
    pub kind: String,
}

impl CatalogEntry {
    /// Builds an entry from one YAML mapping of the catalog.
    pub fn from_mapping(map: &Mapping) -> Self {
        let id = resolve_alias(&ID_ALIASES, |key| map.get(key).and_then(yaml_scalar_text));
        let kind = map
            .get(TYPE_KEY)
            .and_then(yaml_scalar_text)
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default();
        Self { id, kind }
    }

    /// Builds an entry directly from already-resolved parts.
    /// The type is normalized the same way as when loading from YAML.
    pub fn new(id: impl Into<String>, kind: &str) -> Self {
        let id = id.into();
        Self {
            id: (!id.is_empty()).then_some(id),
            kind: kind.trim().to_lowercase(),
        }
    }

    /// `true` if the harness is expected to run this entry.
    pub fn is_automated(&self) -> bool {
        AUTOMATED_TYPES.contains(&self.kind.as_str())
    }

    /// `true` if the entry is a manual test. Manual tests are never looked up in results.
    /// 如果条目是手动测试则为 `true`。手动测试永远不会在结果中查找。
    pub fn is_manual(&self) -> bool {
        self.kind == MANUAL_TYPE
    }

    /// The type as shown in reports: `auto-unittest` collapses to `auto`,
    /// anything else is shown as written.
    ///
    /// 报告中显示的类型：`auto-unittest` 折叠为 `auto`，其余原样显示。
    pub fn display_type(&self) -> &str {
        if self.kind == "auto-unittest" {
            "auto"
        } else {
            &self.kind
        }
    }
}

/// The parsed test catalog, in file order.
/// 已解析的测试目录，保持文件中的顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parses catalog text. `path` is only used in error messages.
    ///
    /// `<<` merge keys are resolved before the document is read, so entries may
    /// share fields through anchors.
    ///
    /// 解析目录文本。`path` 仅用于错误消息。
    /// 读取文档之前会先解析 `<<` 合并键，因此条目可以通过锚点共享字段。
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let parse_error = |source: serde_yaml::Error| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let mut document: Value = serde_yaml::from_str(content).map_err(parse_error)?;
        document.apply_merge().map_err(parse_error)?;
        Self::from_value(&document, path)
    }

    /// Interprets a parsed YAML document as a catalog.
    ///
    /// The document must be either a sequence of mappings or a mapping holding
    /// that sequence under `tests`. Anything else is a configuration error.
    ///
    /// 将已解析的 YAML 文档解释为目录。
    /// 文档必须是映射的序列，或在 `tests` 键下保存该序列的映射。其他情况均为配置错误。
    pub fn from_value(document: &Value, path: &Path) -> Result<Self, CatalogError> {
        let malformed = |detail: String| CatalogError::Malformed {
            path: path.to_path_buf(),
            detail,
        };

        let items = match document {
            Value::Sequence(items) => items,
            Value::Mapping(map) => match map.get("tests") {
                Some(Value::Sequence(items)) => items,
                Some(_) => return Err(malformed("`tests` must be a list of tests".into())),
                None => {
                    return Err(malformed(
                        "expected a list of tests or a mapping with a `tests` key".into(),
                    ));
                }
            },
            _ => {
                return Err(malformed(
                    "expected a list of tests or a mapping with a `tests` key".into(),
                ));
            }
        };

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Mapping(map) => Ok(CatalogEntry::from_mapping(map)),
                _ => Err(malformed(format!("entry #{} is not a mapping", index + 1))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers of the automated entries, in catalog order.
    /// Entries without an identifier are left out.
    ///
    /// 自动化条目的标识符，保持目录顺序。没有标识符的条目会被忽略。
    pub fn automated_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.is_automated())
            .filter_map(|entry| entry.id.as_deref())
            .collect()
    }
}

/// Loads a catalog that must exist.
/// 加载必须存在的目录。
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CatalogError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let catalog = Catalog::from_yaml_str(&content, path)?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded test catalog");
    Ok(catalog)
}

/// Loads a catalog, treating a missing file as an empty catalog.
/// 加载目录，文件缺失时视为空目录。
pub fn load_catalog_or_empty(path: &Path) -> Result<Catalog, CatalogError> {
    match load_catalog(path) {
        Err(CatalogError::Missing { .. }) => {
            tracing::debug!(path = %path.display(), "no test catalog, using an empty one");
            Ok(Catalog::default())
        }
        other => other,
    }
}

