use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{ContentSource, is_post_file};
use crate::error::{Error, Result};

/// 本地目录内容源，读取目录下的 `.mdx` 文件
#[derive(Debug, Clone)]
pub struct LocalSource {
    directory: PathBuf,
}

impl LocalSource {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ContentSource for LocalSource {
    /// 目录不存在时视为没有文章；结果按文件名排序
    async fn list(&self) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::SourceUnavailable(format!(
                    "{}: {}",
                    self.directory.display(),
                    e
                )));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_post_file(&name) && entry.file_type().await?.is_file() {
                names.push(name);
            }
        }
        names.sort();

        Ok(names)
    }

    async fn fetch(&self, id: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.directory.join(id)).await?)
    }
}
