use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// 站点配色主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Light => "Clean light theme with bright backgrounds",
            Theme::Dark => "Modern dark theme with dark backgrounds",
        }
    }

    /// 根元素上需要附加的 class，浅色主题不需要
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    /// 解析持久化保存的主题值，未知值视为未保存
    pub fn parse_stored(stored: Option<&str>) -> Option<Theme> {
        stored.and_then(|s| s.parse().ok())
    }

    /// 系统偏好对应的主题
    pub fn system(prefers_dark: bool) -> Theme {
        match prefers_dark {
            true => Theme::Dark,
            false => Theme::Light,
        }
    }

    /// 初始主题：优先使用已保存的主题，其次跟随系统偏好
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
        Self::parse_stored(stored).unwrap_or_else(|| Self::system(prefers_dark))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
