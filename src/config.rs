use std::{env, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::{error::Result, theme::Theme};

/// 配置文件默认路径
pub const DEFAULT_CONFIG_PATH: &str = "datablog.toml";

/// 应用配置，从 TOML 文件读取，缺省项使用默认值。
///
/// ```toml
/// [source]
/// kind = "github"
/// owner = "someone"
/// repo = "blog"
///
/// [pagination]
/// posts_per_page = 9
/// tag_posts_per_page = 6
///
/// [theme]
/// default = "dark"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub pagination: PaginationConfig,
    pub theme: ThemeSettings,
}

/// 内容源配置，由 `kind` 字段区分
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Local(LocalConfig),
    Github(GithubConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Local(LocalConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// 存放 `.mdx` 文章的目录
    pub directory: PathBuf,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("content/posts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubConfig {
    pub owner: String,
    pub repo: String,
    /// 仓库内存放文章的目录
    #[serde(default = "default_github_path")]
    pub path: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// 访问令牌，未配置时读取环境变量 `GITHUB_TOKEN`
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// 单次请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_github_path() -> String {
    "content/posts".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// 文章列表页每页数量
    pub posts_per_page: usize,
    /// 标签页每页数量
    pub tag_posts_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            posts_per_page: 9,
            tag_posts_per_page: 6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub default: Theme,
}

impl Config {
    /// 从指定路径加载配置
    ///
    /// 文件不存在时使用 [`Config::default`]，随后应用环境变量覆盖。
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        Ok(config.with_token(env::var("GITHUB_TOKEN").ok()))
    }

    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(Into::into)
    }

    /// 配置文件未设置令牌时使用传入的令牌
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let SourceConfig::Github(github) = &mut self.source {
            if github.token.is_none() {
                github.token = token.filter(|t| !t.is_empty());
            }
        }
        self
    }
}
