// index-core/src/models.rs
//! 数据模型

use std::path::{Component, Path, PathBuf};

/// 发现的文档。不保存内容，提取标题时读取一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 磁盘上的路径
    pub path: PathBuf,
    /// 相对于文档根目录的路径
    pub rel_path: PathBuf,
}

impl Document {
    pub fn new(path: PathBuf, rel_path: PathBuf) -> Self {
        Self { path, rel_path }
    }

    fn rel_parts(&self) -> impl Iterator<Item = String> + '_ {
        self.rel_path.components().filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
    }

    /// 使用 `/` 分隔的相对路径，与平台无关
    pub fn link(&self) -> String {
        self.rel_parts().collect::<Vec<_>>().join("/")
    }

    /// 相对路径的顶层目录，根目录下的文档返回 `None`
    pub fn top_dir(&self) -> Option<String> {
        let mut parts = self.rel_parts();
        let first = parts.next()?;
        parts.next().map(|_| first)
    }

    /// 不含扩展名的文件名，作为后备标题
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .or_else(|| self.path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.link())
    }
}

/// 索引中的一个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub entries: Vec<IndexEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sections {
    Grouped(Vec<Group>),
    Flat(Vec<IndexEntry>),
}

/// 渲染索引所需的全部内容（时间戳除外）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub title: String,
    pub sections: Sections,
}

impl IndexDocument {
    pub fn entries(&self) -> Box<dyn Iterator<Item = &IndexEntry> + '_> {
        match &self.sections {
            Sections::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.entries.iter())),
            Sections::Flat(entries) => Box::new(entries.iter()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

pub(crate) fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn doc(rel: &str) -> Document {
        let rel_path = PathBuf::from(rel);
        Document::new(Path::new("/docs").join(&rel_path), rel_path)
    }

    #[rstest]
    #[case("a.md", None)]
    #[case("sub/b.md", Some("sub"))]
    #[case("sub/deeper/c.md", Some("sub"))]
    fn test_top_dir(#[case] rel: &str, #[case] expected: Option<&str>) {
        assert_eq!(doc(rel).top_dir().as_deref(), expected);
    }

    #[rstest]
    #[case("guide.md", "guide")]
    #[case("v1.2.md", "v1.2")]
    #[case("sub/plain.md", "plain")]
    #[case(".md", ".md")]
    fn test_stem(#[case] rel: &str, #[case] expected: &str) {
        assert_eq!(doc(rel).stem(), expected);
    }

    #[test]
    fn test_link_uses_forward_slashes() {
        let rel_path: PathBuf = ["sub", "deeper", "c.md"].iter().collect();
        let d = Document::new(PathBuf::from("/docs").join(&rel_path), rel_path);
        assert_eq!(d.link(), "sub/deeper/c.md");
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to(Path::new("/docs/sub/b.md"), Path::new("/docs")),
            PathBuf::from("sub/b.md")
        );
    }
}
