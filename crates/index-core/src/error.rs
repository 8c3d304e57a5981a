// index-core/src/error.rs
//! 错误类型

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

/// 致命错误。单个文档的读取失败由标题提取处理，不会出现在这里。
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("documents root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("documents root {} is not a readable directory", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to write index to {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}
