//! 请求参数的边界处理。
//!
//! 分页和标签查询只接收已经规范化的参数，这里负责把原始输入转换过去。

/// 页码默认值
pub const DEFAULT_PAGE: i64 = 1;

/// 解析 `page` 参数
///
/// 与 `parseInt(s, 10)` 一致：跳过前导空白，允许一个正负号，取最长的数字前缀。
/// 缺失、无法解析或非正数时返回 [`DEFAULT_PAGE`]。
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE;
    };

    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(n) if !negative && n > 0 => n,
        // 超出 i64 的数字视为极大页码，由分页逻辑限制到末页
        Err(_) if !negative && end > 0 => i64::MAX,
        _ => DEFAULT_PAGE,
    }
}

/// 解码标签参数，非法的百分号编码按原文处理
pub fn decode_tag(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(tag) => tag.into_owned(),
        Err(e) => {
            tracing::debug!(%e, raw, "tag is not valid percent-encoded utf-8");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_valid() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("  12")), 12);
        assert_eq!(parse_page(Some("+4")), 4);
    }

    #[test]
    fn test_parse_page_takes_numeric_prefix() {
        assert_eq!(parse_page(Some("2abc")), 2);
        assert_eq!(parse_page(Some("2.9")), 2);
    }

    #[test]
    fn test_parse_page_malformed_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("-")), 1);
    }

    #[test]
    fn test_parse_page_huge_number() {
        assert_eq!(parse_page(Some("99999999999999999999999")), i64::MAX);
    }

    #[test]
    fn test_decode_tag() {
        assert_eq!(decode_tag("machine%20learning"), "machine learning");
        assert_eq!(decode_tag("C%2B%2B"), "C++");
        assert_eq!(decode_tag("%E4%B8%AD%E6%96%87"), "中文");
        assert_eq!(decode_tag("plain"), "plain");
        assert_eq!(decode_tag("%FF"), "%FF");
    }
}
