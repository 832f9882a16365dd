use std::sync::Arc;

use tokio::sync::Mutex;

use super::{PostLoader, PostProvider};
use crate::{content::Post, error::Result, source::ContentSource};

/// 进程级文章集合缓存。
///
/// 只有一个槽位：首次成功加载后一直复用，没有过期与失效。
/// 加载期间持有锁，并发调用方等待同一次加载完成，不会重复请求上游；
/// 加载失败时槽位保持为空，下次调用会重试。
#[derive(Debug, Default)]
pub struct PostCache {
    slot: Mutex<Option<Arc<[Post]>>>,
}

impl PostCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 槽位为空时执行 `init` 并缓存结果，否则直接返回缓存
    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<Arc<[Post]>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<Post>>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(posts) = slot.as_ref() {
            return Ok(posts.clone());
        }

        let posts: Arc<[Post]> = Arc::from(init().await?);
        *slot = Some(posts.clone());
        Ok(posts)
    }

    pub async fn is_populated(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

/// 带缓存的文章加载器，用于远程内容源。
pub struct CachedLoader<S> {
    loader: PostLoader<S>,
    cache: PostCache,
}

impl<S: ContentSource> CachedLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            loader: PostLoader::new(source),
            cache: PostCache::new(),
        }
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        self.loader.source()
    }
}

impl<S: ContentSource> PostProvider for CachedLoader<S> {
    async fn published_posts(&self) -> Arc<[Post]> {
        match self.cache.get_or_try_init(|| self.loader.try_load()).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(%e, "content source unavailable, nothing cached");
                Arc::from(Vec::new())
            }
        }
    }
}
