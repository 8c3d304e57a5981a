use crate::error::{Result, WrapErr};
use index_core::IndexConfig;
use std::path::Path;

/// Built-in settings, or the given TOML file layered over them.
pub fn load(path: Option<&Path>) -> Result<IndexConfig> {
    match path {
        Some(path) => {
            let cfg = IndexConfig::load_from_file(path)
                .wrap_err_with(|| format!("Load configuration error: {}", path.display()))?;
            tracing::debug!("loaded configuration from {:?}", path);
            Ok(cfg)
        }
        None => Ok(IndexConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use index_core::Layout;
    use tempfile::TempDir;

    #[test]
    fn test_no_file_gives_defaults() {
        assert_eq!(load(None).unwrap(), IndexConfig::default());
    }

    #[test]
    fn test_file_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docindex.toml");
        std::fs::write(&path, "layout = \"flat\"\noutput = \"toc.md\"\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.layout, Layout::Flat);
        assert_eq!(cfg.output, "toc.md");
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "layout = 3").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));
    }
}
