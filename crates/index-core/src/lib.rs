// index-core/src/lib.rs
//! 文档索引生成核心库
//!
//! 扫描文档目录并生成单个 markdown 索引：
//! - 收集根目录下的所有文档 ([`collect`])
//! - 取每个文档的第一个 `# ` 标题 ([`title`])
//! - 按顶层目录分组并排序 ([`group`])
//! - 渲染标题与链接 ([`render`])
//!
//! 每次运行都完整重建索引。

use std::fs;
use std::path::{Path, PathBuf};

pub mod collect;
pub mod config;
pub mod error;
pub mod group;
pub mod models;
pub mod render;
pub mod title;

pub use collect::collect_documents;
pub use config::{IndexConfig, Layout};
pub use error::{ConfigError, IndexError, Result};
pub use group::assemble;
pub use models::{Document, Group, IndexDocument, IndexEntry, Sections};
pub use render::render;
pub use title::{extract_title, find_title, title_from_content};

/// 收集、提取标题并排序 `root` 下的所有文档
pub fn build_index(root: &Path, config: &IndexConfig) -> Result<IndexDocument> {
    let documents = collect_documents(root, config)?;
    Ok(assemble(documents, config, |doc| extract_title(doc, config)))
}

/// 先写入同目录下的临时文件再重命名，写入失败不会留下残缺的索引
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| IndexError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        write_err(e)
    })
}

/// 执行完整流程并返回索引文件路径
///
/// 之前任一步骤失败时不写入任何内容。
pub fn generate(root: &Path, config: &IndexConfig, generated_at: &str) -> Result<PathBuf> {
    let index = build_index(root, config)?;
    let output = root.join(&config.output);
    let text = render(&index, generated_at);
    write_output(&output, &text)?;
    tracing::info!("已写入 {} 个条目: {:?}", index.len(), output);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.md");
        fs::write(&path, "old contents that are longer").unwrap();
        write_output(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!dir.path().join(".index.md.tmp").exists());
    }

    #[test]
    fn test_write_output_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("index.md");
        let err = write_output(&path, "x").unwrap_err();
        assert!(matches!(err, IndexError::WriteOutput { .. }));
    }
}
