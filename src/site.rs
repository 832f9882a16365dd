use tracing::instrument;

use crate::{
    config::PaginationConfig,
    content::Post,
    error::{Error, Result},
    loader::PostProvider,
    pagination::{PageWindow, paginate, paginate_home},
    tags::{filter_by_tag, sorted_tag_counts, unique_tags},
};

/// 博客站点上下文
///
/// [`Blog`] 组合文章提供者和分页配置，为每类页面提供统一的查询入口。
/// 每次查询都从提供者获取集合后重新计算，自身不保存派生状态。
pub struct Blog<P> {
    provider: P,
    pagination: PaginationConfig,
}

impl<P: PostProvider> Blog<P> {
    /// 创建一个新的 [`Blog`] 实例
    pub fn new(provider: P, pagination: PaginationConfig) -> Self {
        Self {
            provider,
            pagination,
        }
    }

    /// 首页：第一页 8 篇，之后每页 9 篇
    #[instrument(skip(self))]
    pub async fn home(&self, page: i64) -> PageWindow<Post> {
        let posts = self.provider.published_posts().await;
        paginate_home(&posts, page)
    }

    /// 文章列表页
    #[instrument(skip(self))]
    pub async fn posts(&self, page: i64) -> Result<PageWindow<Post>> {
        let posts = self.provider.published_posts().await;
        paginate(&posts, page, self.pagination.posts_per_page)
    }

    /// 标签页：先按标签筛选（忽略大小写），再分页
    #[instrument(skip(self))]
    pub async fn tag(&self, tag: &str, page: i64) -> Result<PageWindow<Post>> {
        let posts = self.provider.published_posts().await;
        let tagged = filter_by_tag(&posts, tag);
        Ok(paginate(&tagged, page, self.pagination.tag_posts_per_page)?.cloned())
    }

    /// 标签总览：按文章数倒序
    pub async fn tag_counts(&self) -> Vec<(String, usize)> {
        sorted_tag_counts(&self.provider.published_posts().await)
    }

    /// 所有不同的标签，用于预生成标签页
    pub async fn tags(&self) -> Vec<String> {
        unique_tags(&self.provider.published_posts().await)
    }

    /// 根据 slug 获取单篇文章
    ///
    /// 文章不存在时返回 [`Error::NotFound`]。
    #[instrument(skip(self))]
    pub async fn post(&self, slug: &str) -> Result<Post> {
        self.provider
            .published_posts()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(Error::NotFound)
    }
}
