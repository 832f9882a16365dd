use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// 文章的 front matter 元信息。
///
/// 所有字段的默认值都在反序列化时一次性补齐：
///
/// - `title` / `date` / `excerpt` 缺省或为 `null` 时为空字符串
/// - `tags` 缺省或为 `null` 时为空列表
/// - `published` 缺省或为 `null` 时为 `true`，只有显式写 `false` 才视为未发布
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default = "published_default", deserialize_with = "null_as_published")]
    pub published: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            excerpt: String::new(),
            tags: Vec::new(),
            published: published_default(),
        }
    }
}

impl FrontMatter {
    /// 将原始文本拆分为 front matter 和正文。
    ///
    /// 没有 front matter 的文本视为全部是正文，元信息取默认值；
    /// 有起始 `---` 却没有结束 `---` 的文本返回 [`Error::FrontMatter`]。
    pub fn split(raw: &str) -> Result<(FrontMatter, &str)> {
        match Self::extract_front_matter_and_body(raw)? {
            Some((yaml_str, body)) => Ok((Self::parse(yaml_str)?, body)),
            None => Ok((FrontMatter::default(), raw)),
        }
    }

    /// 从原始内容中提取 front matter 字符串和正文。
    fn extract_front_matter_and_body(content: &str) -> Result<Option<(&str, &str)>> {
        const DELIM: &str = "---";

        let content = content.trim_start_matches('\u{feff}');
        let Some(first_line_end) = content.find('\n') else {
            return match content.trim_end() == DELIM {
                true => Err(Error::FrontMatter(
                    "Front matter does not terminate with expected delimiter ---",
                )),
                false => Ok(None),
            };
        };

        if content[..first_line_end].trim_end() != DELIM {
            return Ok(None);
        }

        let rest = &content[first_line_end + 1..];
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIM {
                let yaml_str = &rest[..offset];
                let body_str = &rest[offset + line.len()..];
                return Ok(Some((yaml_str, body_str)));
            }
            offset += line.len();
        }

        Err(Error::FrontMatter(
            "Front matter does not terminate with expected delimiter ---",
        ))
    }

    /// 解析 YAML 格式的 front matter，空块按默认值处理。
    fn parse(yaml_str: &str) -> Result<FrontMatter> {
        if yaml_str.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(yaml_str).map_err(Into::into)
    }
}

fn published_default() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_published<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(published_default))
}
