use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use super::{FrontMatter, reading_time};
use crate::error::Result;

/// 一篇已解析的博客文章，构造后不可变。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Post {
    /// 以 `Jan 05, 2024` 的形式展示日期，无法解析时原样返回
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }

    /// 文章是否带有指定标签（忽略大小写）
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

pub struct NoContent;
pub struct Content(String);

/// [`Post`] 构造器。
///
/// 先由内容标识（文件名）确定 slug，再填入原始文本，最后解析为 [`Post`]：
///
/// ```ignore
/// let post = PostBuilder::new("hello-world.mdx").content(raw).build()?;
/// ```
pub struct PostBuilder<T> {
    slug: String,
    content: T,
}

impl PostBuilder<NoContent> {
    pub fn new(identifier: impl AsRef<Path>) -> Self {
        // 去除文件扩展名
        let slug = identifier
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            slug,
            content: NoContent,
        }
    }

    pub fn content(self, raw: impl Into<String>) -> PostBuilder<Content> {
        PostBuilder {
            slug: self.slug,
            content: Content(raw.into()),
        }
    }
}

impl<T> PostBuilder<T> {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl PostBuilder<Content> {
    pub fn build(self) -> Result<Post> {
        let (front_matter, body) = FrontMatter::split(&self.content.0)?;

        Ok(Post {
            slug: self.slug,
            title: front_matter.title,
            date: front_matter.date,
            excerpt: front_matter.excerpt,
            reading_time: reading_time(body),
            content: body.to_string(),
            tags: front_matter.tags,
            published: front_matter.published,
        })
    }
}
