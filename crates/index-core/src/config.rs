// index-core/src/config.rs
//! 配置模块
//!
//! 默认值即生成器一直使用的固定常量，TOML 文件可覆盖其中的单个字段。

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::error::ConfigError;

/// 索引输出形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// 每个顶层目录一个 `## <group>` 小节
    Grouped,
    /// 单一列表，不带分组标题
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct IndexConfig {
    /// 文档扩展名（不含点）
    pub extension: String,
    /// 任意层级都不收集的文件名
    pub exclude: Vec<String>,
    /// 输出文件路径，相对于文档根目录
    pub output: String,
    pub metadata_delimiter: String,
    /// 查找标题前是否跳过开头的元数据块
    pub skip_metadata: bool,
    pub layout: Layout,
    /// 索引顶部 `# ` 标题文本
    pub title: String,
    /// 根目录下文档所属的分组名
    pub root_group: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            exclude: vec!["index.md".to_string(), "README.md".to_string()],
            output: "index.md".to_string(),
            metadata_delimiter: "---".to_string(),
            skip_metadata: true,
            layout: Layout::Grouped,
            title: "Index".to_string(),
            root_group: "(root)".to_string(),
        }
    }
}

impl IndexConfig {
    pub fn load_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_str(&content)
    }

    /// 文件名是否为需要收集的文档
    pub fn matches(&self, name: &str) -> bool {
        if self.exclude.iter().any(|excluded| excluded == name) {
            return false;
        }
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }

    /// 相对路径是否为索引输出文件本身
    pub fn is_output(&self, rel_path: &Path) -> bool {
        fn parts(p: &Path) -> Vec<Component<'_>> {
            p.components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect()
        }
        parts(rel_path) == parts(Path::new(&self.output))
    }
}
