// index-core/src/group.rs
//! 分组与排序

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::{IndexConfig, Layout};
use crate::models::{Document, Group, IndexDocument, IndexEntry, Sections};

/// 忽略大小写比较，相同时再按原字符串比较，保证顺序固定
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn group_key(doc: &Document, config: &IndexConfig) -> String {
    doc.top_dir().unwrap_or_else(|| config.root_group.clone())
}

fn sort_documents(docs: &mut [Document]) {
    docs.sort_by_cached_key(|d| {
        let link = d.link();
        (link.to_lowercase(), link)
    });
}

fn to_entries<F>(docs: &[Document], title_of: &mut F) -> Vec<IndexEntry>
where
    F: FnMut(&Document) -> String,
{
    docs.iter()
        .map(|d| IndexEntry {
            title: title_of(d),
            link: d.link(),
        })
        .collect()
}

/// 由收集到的文档构建有序索引
///
/// `title_of` 按输出顺序对每个文档恰好调用一次。
pub fn assemble<F>(documents: Vec<Document>, config: &IndexConfig, mut title_of: F) -> IndexDocument
where
    F: FnMut(&Document) -> String,
{
    let sections = match config.layout {
        Layout::Flat => {
            let mut docs = documents;
            sort_documents(&mut docs);
            Sections::Flat(to_entries(&docs, &mut title_of))
        }
        Layout::Grouped => {
            let mut buckets: BTreeMap<String, Vec<Document>> = BTreeMap::new();
            for doc in documents {
                buckets.entry(group_key(&doc, config)).or_default().push(doc);
            }

            let mut named: Vec<(String, Vec<Document>)> = buckets.into_iter().collect();
            named.sort_by(|(a, _), (b, _)| caseless_cmp(a, b));

            let groups = named
                .into_iter()
                .map(|(name, mut docs)| {
                    sort_documents(&mut docs);
                    let entries = to_entries(&docs, &mut title_of);
                    Group { name, entries }
                })
                .collect();
            Sections::Grouped(groups)
        }
    };

    IndexDocument {
        title: config.title.clone(),
        sections,
    }
}
