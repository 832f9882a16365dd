//! 标签索引。
//!
//! 注意两种匹配规则并存：
//!
//! - [`group_by_tag_counts`] 按标签原文精确计数，区分大小写
//! - [`filter_by_tag`] 按标签忽略大小写筛选
//!
//! 因此 `ML` 的计数可能小于按 `ML` 筛选得到的文章数。

use std::collections::{HashMap, HashSet};

use crate::content::Post;

/// 统计每个标签出现的次数，标签原文作为键（区分大小写）
pub fn group_by_tag_counts(posts: &[Post]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        *counts.entry(tag.clone()).or_insert(0) += 1;
    }
    counts
}

/// 用于展示的标签计数：按数量倒序，数量相同时保持首次出现的顺序
pub fn sorted_tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let counts = group_by_tag_counts(posts);
    let mut sorted: Vec<(String, usize)> = unique_tags(posts)
        .into_iter()
        .map(|tag| {
            let count = counts.get(&tag).copied().unwrap_or_default();
            (tag, count)
        })
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// 筛选带有指定标签的文章（忽略大小写），保持原有顺序
pub fn filter_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| p.has_tag(tag)).collect()
}

/// 所有不同的标签（按原文去重），按首次出现顺序排列
pub fn unique_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|tag| seen.insert(*tag))
        .cloned()
        .collect()
}

/// 标签页路径：`/tags/{小写并编码后的标签}`
pub fn tag_path(tag: &str) -> String {
    format!("/tags/{}", urlencoding::encode(&tag.to_lowercase()))
}
