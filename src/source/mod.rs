mod github;
mod local;

pub use self::{github::GithubSource, local::LocalSource};

use crate::error::Result;

/// 文章源文件扩展名
pub const POST_EXTENSION: &str = ".mdx";

/// 文章内容源
///
/// 只负责列出内容标识并按标识读取原始文本，不关心解析。
pub trait ContentSource: Send + Sync {
    /// 列出全部文章内容标识（通常是文件名）
    ///
    /// 整体失败时返回错误，由加载器处理为空集合。
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    /// 按标识读取原始文本
    fn fetch(&self, id: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// 是否为文章源文件
pub fn is_post_file(name: &str) -> bool {
    name.ends_with(POST_EXTENSION)
}
