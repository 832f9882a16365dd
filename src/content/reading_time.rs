const WORDS_PER_MINUTE: f64 = 200.0;

/// 估算正文的阅读时长，返回形如 `"3 min read"` 的展示文本。
///
/// 以空白分隔的连续字符算一个词，CJK 字符每个单独算一个词。
pub fn reading_time(body: &str) -> String {
    let minutes = count_words(body) as f64 / WORDS_PER_MINUTE;
    format!("{} min read", minutes.ceil() as u64)
}

fn count_words(body: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in body.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }

    words
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30ff}'
        | '\u{3400}'..='\u{4dbf}'
        | '\u{4e00}'..='\u{9fff}'
        | '\u{ac00}'..='\u{d7af}'
        | '\u{f900}'..='\u{faff}'
        | '\u{ff66}'..='\u{ff9f}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert_eq!(reading_time(""), "0 min read");
    }

    #[test]
    fn test_rounds_up_partial_minutes() {
        assert_eq!(reading_time("one two three"), "1 min read");

        let body = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&body), "2 min read");
    }

    #[test]
    fn test_exact_minutes() {
        let body = vec!["word"; 400].join("\n\t ");
        assert_eq!(reading_time(&body), "2 min read");
    }

    #[test]
    fn test_cjk_characters_count_individually() {
        assert_eq!(count_words("学习 Rust 语言"), 5);
        assert_eq!(count_words("你好world"), 3);
    }

    #[test]
    fn test_monotonic_in_length() {
        let short = reading_time(&vec!["a"; 150].join(" "));
        let long = reading_time(&vec!["a"; 650].join(" "));
        assert_eq!(short, "1 min read");
        assert_eq!(long, "4 min read");
    }
}
