//! 命令行入口：每个子命令对应站点的一类页面查询。

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::{
    config::{self, Config},
    error::Result,
    loader::{CachedLoader, PostLoader, PostProvider},
    pagination::{page_items, page_url},
    query::{decode_tag, parse_page},
    scaffold::{self, NewPost},
    site::Blog,
    source::{GithubSource, LocalSource},
    tags::tag_path,
    theme::Theme,
};

#[derive(Parser, Debug)]
#[command(name = "datablog", version, about = "Query and scaffold blog posts", long_about = None)]
pub struct Cli {
    /// 配置文件路径
    #[arg(long, env = "DATABLOG_CONFIG", default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Home page (8 posts on page one, 9 afterwards)
    Home {
        #[arg(long)]
        page: Option<String>,
    },
    /// Posts index page
    Posts {
        #[arg(long)]
        page: Option<String>,
    },
    /// All tags with post counts
    Tags,
    /// Posts carrying a tag (case-insensitive)
    Tag {
        /// Percent-encoded tag, as it appears in the URL
        tag: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// A single post by slug
    Post { slug: String },
    /// Scaffold a new post in the local content directory
    New {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        excerpt: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Output directory, defaults to the configured local directory
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Visible page numbers for a pagination bar
    Nav {
        #[arg(long)]
        page: usize,
        #[arg(long)]
        total: usize,
        #[arg(long, default_value = "")]
        base: String,
    },
    /// Resolve the initial theme
    Theme {
        /// Persisted theme value, if any
        #[arg(long)]
        stored: Option<String>,
        /// System color scheme preference; the configured default applies when omitted
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        prefers_dark: Option<bool>,
    },
}

/// 标签总览中的一项
#[derive(Debug, Serialize)]
struct TagSummary {
    tag: String,
    count: usize,
    path: String,
}

/// 导航栏中的一个链接
#[derive(Debug, Serialize)]
struct NavLink {
    page: usize,
    url: String,
}

#[derive(Debug, Serialize)]
struct Navigation {
    items: Vec<crate::pagination::PageItem>,
    prev: Option<NavLink>,
    next: Option<NavLink>,
}

#[derive(Debug, Serialize)]
struct ThemeInfo {
    theme: Theme,
    display_name: &'static str,
    description: &'static str,
    css_class: Option<&'static str>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 计算导航栏，超出范围的页码限制到 `[1, max(total, 1)]`
fn navigation(page: usize, total: usize, base: &str) -> Navigation {
    let page = page.clamp(1, total.max(1));
    let link = |page: usize| NavLink {
        page,
        url: page_url(base, page),
    };

    Navigation {
        items: page_items(page, total),
        prev: (page > 1).then(|| link(page - 1)),
        next: (page < total).then(|| link(page + 1)),
    }
}

/// 执行命令
///
/// 需要文章集合的命令按配置的内容源组装提供者：本地目录每次重新读取，
/// GitHub 仓库在进程内缓存首次成功加载的结果。
pub async fn dispatch(command: Command, config: &Config) -> Result<()> {
    if !command.needs_posts() {
        return execute_offline(command, config).await;
    }

    let pagination = config.pagination.clone();
    match &config.source {
        config::SourceConfig::Local(local) => {
            let loader = PostLoader::new(LocalSource::new(&local.directory));
            execute(command, &Blog::new(loader, pagination), config).await
        }
        config::SourceConfig::Github(github) => {
            let loader = CachedLoader::new(GithubSource::new(github)?);
            execute(command, &Blog::new(loader, pagination), config).await
        }
    }
}

/// 执行需要文章集合的查询命令
pub async fn execute<P: PostProvider>(
    command: Command,
    blog: &Blog<P>,
    config: &Config,
) -> Result<()> {
    match command {
        Command::Home { page } => print_json(&blog.home(parse_page(page.as_deref())).await),
        Command::Posts { page } => print_json(&blog.posts(parse_page(page.as_deref())).await?),
        Command::Tag { tag, page } => {
            let tag = decode_tag(&tag);
            print_json(&blog.tag(&tag, parse_page(page.as_deref())).await?)
        }
        Command::Tags => {
            let summaries: Vec<TagSummary> = blog
                .tag_counts()
                .await
                .into_iter()
                .map(|(tag, count)| TagSummary {
                    path: tag_path(&tag),
                    tag,
                    count,
                })
                .collect();
            print_json(&summaries)
        }
        Command::Post { slug } => print_json(&blog.post(&slug).await?),
        command => execute_offline(command, config).await,
    }
}

/// 执行不需要加载文章的命令
pub async fn execute_offline(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::New {
            title,
            excerpt,
            tags,
            directory,
        } => {
            let directory = directory.unwrap_or_else(|| match &config.source {
                config::SourceConfig::Local(local) => local.directory.clone(),
                config::SourceConfig::Github(_) => config::LocalConfig::default().directory,
            });
            let post = NewPost {
                title,
                excerpt,
                tags: NewPost::parse_tags(&tags),
            };
            let path =
                scaffold::create_post(&directory, &post, chrono::Local::now().date_naive()).await?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Nav { page, total, base } => print_json(&navigation(page, total, &base)),
        Command::Theme {
            stored,
            prefers_dark,
        } => {
            let theme = match prefers_dark {
                Some(prefers_dark) => Theme::initial(stored.as_deref(), prefers_dark),
                None => Theme::parse_stored(stored.as_deref()).unwrap_or(config.theme.default),
            };
            print_json(&ThemeInfo {
                theme,
                display_name: theme.display_name(),
                description: theme.description(),
                css_class: theme.css_class(),
            })
        }
        command => {
            tracing::warn!(?command, "command requires the post collection");
            Ok(())
        }
    }
}

impl Command {
    /// 是否需要加载文章集合
    pub fn needs_posts(&self) -> bool {
        matches!(
            self,
            Command::Home { .. }
                | Command::Posts { .. }
                | Command::Tags
                | Command::Tag { .. }
                | Command::Post { .. }
        )
    }
}
