//! 新文章脚手架：根据标题生成 slug，并写入带 front matter 的 `.mdx` 模板。

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tokio::io::AsyncWriteExt;

use crate::{
    error::{Error, Result},
    source::POST_EXTENSION,
};

/// 新文章的基本信息
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl NewPost {
    /// 解析逗号分隔的标签，去掉空白和空项
    pub fn parse_tags(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// 生成文件内容：front matter 加起始正文模板
    pub fn render(&self, date: NaiveDate) -> Result<String> {
        let tags = self
            .tags
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?
            .join(", ");

        Ok(format!(
            r#"---
title: {title}
date: "{date}"
excerpt: {excerpt}
tags: [{tags}]
published: true
---

# {raw_title}

{raw_excerpt}

## Introduction

Start writing your content here...

## Mathematical Equations

You can include inline math like $E = mc^2$ or block equations:

$$\frac{{\partial J}}{{\partial \theta}} = \frac{{1}}{{m}} \sum_{{i=1}}^{{m}} (h_\theta(x^{{(i)}}) - y^{{(i)}}) x^{{(i)}}$$

## Code Examples

```python
import numpy as np
import pandas as pd

# Your code here
def example_function():
    return "Hello, Data Science!"
```

## Conclusion

Wrap up your thoughts here...
"#,
            title = serde_json::to_string(&self.title)?,
            date = date.format("%Y-%m-%d"),
            excerpt = serde_json::to_string(&self.excerpt)?,
            raw_title = self.title,
            raw_excerpt = self.excerpt,
        ))
    }
}

/// 将标题转换为 slug
///
/// 转小写，去掉除 ASCII 字母数字、`_`、空白和 `-` 以外的字符，
/// 连续的空白、`_`、`-` 合并为一个 `-`，并去掉首尾的 `-`。
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        }
    }

    slug
}

/// 在 `directory` 下创建新文章，返回文件路径
///
/// 目录不存在时自动创建；同名文章已存在时返回 [`Error::AlreadyExists`]。
pub async fn create_post(directory: &Path, post: &NewPost, date: NaiveDate) -> Result<PathBuf> {
    let slug = post.slug();
    if slug.is_empty() {
        return Err(Error::InvalidArgument("title must contain at least one letter or digit"));
    }

    let content = post.render(date)?;

    tokio::fs::create_dir_all(directory).await?;
    let path = directory.join(format!("{}{}", slug, POST_EXTENSION));

    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(Error::AlreadyExists(path)),
        Err(e) => return Err(e.into()),
    };
    if let Err(e) = write_all(&mut file, &content).await {
        // 写入失败时删除残缺文件
        drop(file);
        if let Err(remove) = tokio::fs::remove_file(&path).await {
            tracing::warn!(%remove, path = %path.display(), "failed to remove partial post");
        }
        return Err(e);
    }

    tracing::info!(slug = %slug, path = %path.display(), "post created");
    Ok(path)
}

async fn write_all(file: &mut tokio::fs::File, content: &str) -> Result<()> {
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostBuilder;

    fn sample() -> NewPost {
        NewPost {
            title: "Understanding \"Attention\" Is All You Need".to_string(),
            excerpt: "Transformers: a gentle tour".to_string(),
            tags: NewPost::parse_tags(" ML, deep learning ,, nlp "),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust_and   -- WASM  "), "rust-and-wasm");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
        assert_eq!(slugify("数学 Math"), "math");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(sample().tags, vec!["ML", "deep learning", "nlp"]);
        assert!(NewPost::parse_tags("").is_empty());
    }

    #[test]
    fn test_rendered_post_parses_back() {
        let new_post = sample();
        let raw = new_post.render(date()).unwrap();

        let post = PostBuilder::new(format!("{}.mdx", new_post.slug()))
            .content(raw)
            .build()
            .expect("生成的模板应能被解析");

        assert_eq!(post.slug, "understanding-attention-is-all-you-need");
        assert_eq!(post.title, new_post.title);
        assert_eq!(post.date, "2024-06-01");
        assert_eq!(post.excerpt, new_post.excerpt);
        assert_eq!(post.tags, new_post.tags);
        assert!(post.published);
        assert!(post.content.contains(r"\frac{\partial J}{\partial \theta}"));
    }

    #[tokio::test]
    async fn test_create_post_writes_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("content/posts");

        let path = create_post(&posts_dir, &sample(), date())
            .await
            .expect("创建文章失败");

        assert_eq!(
            path,
            posts_dir.join("understanding-attention-is-all-you-need.mdx")
        );
        assert!(path.is_file());

        let again = create_post(&posts_dir, &sample(), date()).await;
        assert!(matches!(again, Err(Error::AlreadyExists(p)) if p == path));
    }

    #[tokio::test]
    async fn test_create_post_writes_complete_template() {
        let dir = tempfile::tempdir().unwrap();
        let new_post = sample();

        let path = create_post(dir.path(), &new_post, date()).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, new_post.render(date()).unwrap());
    }

    #[tokio::test]
    async fn test_create_post_rejects_empty_slug() {
        let dir = tempfile::tempdir().unwrap();
        let post = NewPost {
            title: "???".to_string(),
            excerpt: String::new(),
            tags: Vec::new(),
        };

        assert!(matches!(
            create_post(dir.path(), &post, date()).await,
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0, "失败时不应留下文件");
    }
}
