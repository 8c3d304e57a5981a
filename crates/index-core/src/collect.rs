// index-core/src/collect.rs
//! 文档收集
//!
//! 遍历文档根目录，返回所有文件名通过 [`IndexConfig::matches`] 的文件。
//! 返回顺序取决于遍历器，排序由调用方负责。

use std::fs;
use std::io;
use std::path::Path;

use ignore::WalkBuilder;

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::models::{Document, relative_to};

/// 根目录不存在或无法列出时返回错误
fn check_root(root: &Path) -> Result<()> {
    let meta = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(IndexError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(IndexError::RootUnreadable {
                path: root.to_path_buf(),
                source: e,
            });
        }
    };

    if !meta.is_dir() {
        return Err(IndexError::RootUnreadable {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    fs::read_dir(root).map_err(|e| IndexError::RootUnreadable {
        path: root.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

pub fn collect_documents(root: &Path, config: &IndexConfig) -> Result<Vec<Document>> {
    check_root(root)?;

    let mut builder = WalkBuilder::new(root);
    // 隐藏文件同样收集，不读取任何 ignore 文件
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false);

    tracing::debug!("开始遍历目录: {:?}", root);

    let mut documents = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if !config.matches(&name) {
                    continue;
                }
                let rel_path = relative_to(path, root);
                if config.is_output(&rel_path) {
                    continue;
                }
                tracing::debug!("发现文档: {:?}", path);
                documents.push(Document::new(path.to_path_buf(), rel_path));
            }
            Err(e) if e.depth() == Some(0) => {
                return Err(IndexError::Walk {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!("遍历错误，跳过: {}", e);
            }
        }
    }

    tracing::info!("共收集 {} 个文档: {:?}", documents.len(), root);
    Ok(documents)
}
