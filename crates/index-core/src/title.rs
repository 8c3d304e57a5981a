// index-core/src/title.rs
//! 标题提取
//!
//! 文档标题取第一个 `# ` 标题行。启用时先跳过开头的元数据块（`---` ... `---`）；
//! 若开头分隔符没有闭合，则不跳过任何内容，从第 0 行开始查找。

use std::fs;

use crate::config::IndexConfig;
use crate::models::Document;

const HEADING_PREFIX: &str = "# ";

/// 行边界字符：`\n`、`\r`（`\r\n` 视为一个）、`\v`、`\f`、`\x1c`-`\x1e`、
/// `\u{85}`、`\u{2028}`、`\u{2029}`
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// 按全部行边界切分文本，末尾的换行不产生空行
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(at) = self.rest.find(LINE_BREAKS) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..at];
        let tail = &self.rest[at..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(0, char::len_utf8)
        };
        self.rest = &tail[skip..];
        Some(line)
    }
}

pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 位于开头分隔符与其（可能缺失的）闭合分隔符之间
    InsideMetadata,
    ScanningForHeading,
}

fn heading_text(line: &str) -> Option<&str> {
    let text = line.strip_prefix(HEADING_PREFIX)?.trim();
    (!text.is_empty()).then_some(text)
}

/// 返回第一个标题，没有则返回 `None`
pub fn find_title<'a>(content: &'a str, config: &IndexConfig) -> Option<&'a str> {
    let mut lines = split_lines(content);
    let delimiter = config.metadata_delimiter.as_str();

    let mut state = ScanState::ScanningForHeading;
    if config.skip_metadata {
        match lines.next() {
            Some(first) if first.trim() == delimiter => state = ScanState::InsideMetadata,
            Some(first) => {
                if let Some(title) = heading_text(first) {
                    return Some(title);
                }
            }
            None => return None,
        }
    }

    // 未闭合块内的标题同样有效：记下第一个，直到块闭合或到达文件末尾
    let mut pending = None;
    for line in lines {
        match state {
            ScanState::InsideMetadata => {
                if line.trim() == delimiter {
                    pending = None;
                    state = ScanState::ScanningForHeading;
                } else if pending.is_none() {
                    pending = heading_text(line);
                }
            }
            ScanState::ScanningForHeading => {
                if let Some(title) = heading_text(line) {
                    return Some(title);
                }
            }
        }
    }

    match state {
        ScanState::InsideMetadata => {
            tracing::debug!("元数据块未闭合，从第 0 行开始查找");
            pending
        }
        ScanState::ScanningForHeading => None,
    }
}

/// 从已读入的文本提取标题，找不到时使用 `stem`
pub fn title_from_content(content: &str, stem: &str, config: &IndexConfig) -> String {
    find_title(content, config)
        .map(str::to_string)
        .unwrap_or_else(|| stem.to_string())
}

/// 读取文档并提取标题，读取或解码失败时使用文件名，不会返回错误
pub fn extract_title(doc: &Document, config: &IndexConfig) -> String {
    let stem = doc.stem();
    match fs::read_to_string(&doc.path) {
        Ok(content) => {
            let title = title_from_content(&content, &stem, config);
            tracing::debug!("提取标题 {:?}: {}", doc.rel_path, title);
            title
        }
        Err(e) => {
            tracing::warn!("无法读取 {:?}，使用文件名作为标题: {}", doc.path, e);
            stem
        }
    }
}
