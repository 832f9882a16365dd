use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;

use super::{ContentSource, is_post_file};
use crate::{
    config::GithubConfig,
    error::{Error, Result},
};

/// GitHub 仓库内容源。
///
/// 通过 GitHub contents API 列出仓库目录下的 `.mdx` 文件，并按文件名拉取原始内容。
#[derive(Clone)]
pub struct GithubSource {
    client: reqwest::Client,
    contents_url: String,
    branch: String,
}

impl GithubSource {
    /// 根据 [`GithubConfig`] 创建内容源
    ///
    /// ```ignore
    /// let source = GithubSource::new(&config)?;
    /// ```
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(Self::default_headers(config.token.as_deref())?)
            .build()?;

        Ok(Self {
            client,
            contents_url: format!(
                "{}/repos/{}/{}/contents/{}",
                config.api_base.trim_end_matches('/'),
                config.owner,
                config.repo,
                config.path.trim_matches('/')
            ),
            branch: config.branch.clone(),
        })
    }

    fn default_headers(token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidArgument("github token is not a valid header value"))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub fn contents_url(&self) -> &str {
        &self.contents_url
    }

    /// 单个文件的 contents API 地址，文件名按路径段编码
    pub fn file_url(&self, id: &str) -> String {
        format!("{}/{}", self.contents_url, urlencoding::encode(id))
    }
}

/// contents API 返回的目录条目
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// 只保留目录下的 `.mdx` 文件
fn post_names(entries: Vec<ContentEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|e| e.kind == "file" && is_post_file(&e.name))
        .map(|e| e.name)
        .collect()
}

impl ContentSource for GithubSource {
    async fn list(&self) -> Result<Vec<String>> {
        let resp = self
            .client
            .get(&self.contents_url)
            .query(&[("ref", &self.branch)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        let entries: Vec<ContentEntry> = resp
            .json()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        Ok(post_names(entries))
    }

    async fn fetch(&self, id: &str) -> Result<String> {
        let resp = self
            .client
            .get(self.file_url(id))
            .query(&[("ref", &self.branch)])
            .header(
                header::ACCEPT,
                HeaderValue::from_static("application/vnd.github.raw+json"),
            )
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.text().await?)
    }
}
