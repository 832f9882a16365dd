use std::{io, path::PathBuf};

pub type Result<T> = core::result::Result<T, Error>;

/// 全局错误类型。
///
/// - [`Error::FrontMatter`]：单篇文章的 front matter 结构错误，加载时丢弃该文章
/// - [`Error::SourceUnavailable`]：内容源整体不可用，加载器返回空集合
/// - [`Error::InvalidArgument`]：调用方传入非法参数（例如非正的分页大小）
/// - [`Error::NotFound`]：请求的文章不存在
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    FrontMatter(&'static str),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("content source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Not Found")]
    NotFound,

    #[error("post already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

impl Error {
    /// 是否为“不存在”类错误，边界层据此返回 404 语义
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
