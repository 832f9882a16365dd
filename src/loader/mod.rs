mod cache;

pub use self::cache::{CachedLoader, PostCache};

use std::sync::Arc;

use crate::{
    content::{Post, PostBuilder},
    error::Result,
    source::ContentSource,
};

/// 已发布文章集合的提供者
///
/// 返回的集合只包含已发布文章，并按日期倒序排列。
pub trait PostProvider: Send + Sync {
    fn published_posts(&self) -> impl std::future::Future<Output = Arc<[Post]>> + Send;
}

/// 文章加载器，每次调用都从内容源重新构建集合。
#[derive(Debug, Clone)]
pub struct PostLoader<S> {
    source: S,
}

impl<S: ContentSource> PostLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 加载全部已发布文章
    ///
    /// - 单篇文章读取或解析失败时记录日志并跳过，不影响其他文章
    /// - 内容源整体不可用时返回错误
    /// - 结果按 `date` 字符串倒序稳定排序，同一天的文章保持原有顺序
    pub async fn try_load(&self) -> Result<Vec<Post>> {
        let ids = self.source.list().await?;

        let mut posts = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.load_one(id).await {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!(%e, id = %id, "skip malformed post"),
            }
        }

        posts.retain(|p| p.published);
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(listed = ids.len(), published = posts.len(), "posts loaded");
        Ok(posts)
    }

    /// 同 [`PostLoader::try_load`]，内容源不可用时返回空集合
    pub async fn load_published_posts(&self) -> Vec<Post> {
        match self.try_load().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(%e, "content source unavailable");
                Vec::new()
            }
        }
    }

    async fn load_one(&self, id: &str) -> Result<Post> {
        let raw = self.source.fetch(id).await?;
        PostBuilder::new(id).content(raw).build()
    }
}

impl<S: ContentSource> PostProvider for PostLoader<S> {
    async fn published_posts(&self) -> Arc<[Post]> {
        Arc::from(self.load_published_posts().await)
    }
}
