// index-core/src/render.rs
//! 输出渲染

use std::fmt::Write;

use crate::models::{IndexDocument, IndexEntry, Sections};

fn push_entries(out: &mut String, entries: &[IndexEntry]) {
    for entry in entries {
        let _ = writeln!(out, "- [{}]({})", entry.title, entry.link);
    }
}

/// 将索引渲染为 markdown，`generated_at` 原样写入头部
///
/// 结果去除末尾空白，并以单个换行结尾。
pub fn render(index: &IndexDocument, generated_at: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", index.title);
    out.push('\n');
    let _ = writeln!(out, "_Auto-generated: {generated_at}_");
    out.push('\n');

    match &index.sections {
        Sections::Grouped(groups) => {
            for group in groups {
                let _ = writeln!(out, "## {}", group.name);
                out.push('\n');
                push_entries(&mut out, &group.entries);
                out.push('\n');
            }
        }
        Sections::Flat(entries) => push_entries(&mut out, entries),
    }

    let mut out = out.trim_end().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;

    fn entry(title: &str, link: &str) -> IndexEntry {
        IndexEntry {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_grouped() {
        let index = IndexDocument {
            title: "Index".to_string(),
            sections: Sections::Grouped(vec![
                Group {
                    name: "(root)".to_string(),
                    entries: vec![entry("A Title", "a.md")],
                },
                Group {
                    name: "sub".to_string(),
                    entries: vec![entry("B", "sub/b.md"), entry("c", "sub/deep/c.md")],
                },
            ]),
        };
        let expected = "\
# Index

_Auto-generated: 2024-01-02 03:04_

## (root)

- [A Title](a.md)

## sub

- [B](sub/b.md)
- [c](sub/deep/c.md)
";
        assert_eq!(render(&index, "2024-01-02 03:04"), expected);
    }

    #[test]
    fn test_flat() {
        let index = IndexDocument {
            title: "Index".to_string(),
            sections: Sections::Flat(vec![entry("A", "a.md"), entry("B", "sub/b.md")]),
        };
        let expected = "\
# Index

_Auto-generated: now_

- [A](a.md)
- [B](sub/b.md)
";
        assert_eq!(render(&index, "now"), expected);
    }

    #[test]
    fn test_empty_index_ends_with_single_newline() {
        let index = IndexDocument {
            title: "Index".to_string(),
            sections: Sections::Grouped(Vec::new()),
        };
        assert_eq!(render(&index, "t"), "# Index\n\n_Auto-generated: t_\n");
    }

    #[test]
    fn test_no_blank_line_at_end() {
        let index = IndexDocument {
            title: "Index".to_string(),
            sections: Sections::Flat(vec![entry("x", "x.md")]),
        };
        let out = render(&index, "t");
        assert!(out.ends_with("- [x](x.md)\n"));
        assert!(!out.ends_with("\n\n"));
    }
}
