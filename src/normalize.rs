use crate::stopwords::StopwordSet;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw input text and split it into query lines.
/// `lines()` yields no trailing element after a final newline, so the
/// result length equals the physical line count of the file.
pub fn split_lines(text: &str) -> Vec<String> {
    let text: String = text.nfkc().collect();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.lines().map(|l| l.to_string()).collect()
}

/// Trim, lowercase, tokenize on whitespace, drop stopwords, rejoin with
/// single spaces. Token order is preserved; a blank line or a line whose
/// tokens are all stopwords yields the empty string.
pub fn normalize(line: &str, stopwords: &StopwordSet) -> String {
    let lowered = line.trim().to_lowercase();
    let kept: Vec<&str> = lowered
        .split_whitespace()
        .filter(|t| !stopwords.is_stopword(t))
        .collect();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_collapse() {
        let set = StopwordSet::empty();
        assert_eq!(normalize("  Hello   WORLD  ", &set), "hello world");
    }

    #[test]
    fn test_stopword_removal() {
        let set = StopwordSet::from_list(&["i", "very"]);
        assert_eq!(normalize("I Feel Very Sad Today", &set), "feel sad today");
    }

    #[test]
    fn test_filter_compares_after_lowercasing() {
        let set = StopwordSet::from_list(&["the"]);
        assert_eq!(normalize("The THE the", &set), "");
    }

    #[test]
    fn test_blank_line() {
        let set = StopwordSet::empty();
        assert_eq!(normalize("   ", &set), "");
        assert_eq!(normalize("", &set), "");
    }

    #[test]
    fn test_all_tokens_removed() {
        let set = StopwordSet::from_list(&["a", "b"]);
        assert_eq!(normalize("a b a", &set), "");
    }

    #[test]
    fn test_token_order_preserved() {
        let set = StopwordSet::from_list(&["b"]);
        assert_eq!(normalize("c b a", &set), "c a");
    }

    #[test]
    fn test_idempotence() {
        let set = StopwordSet::from_list(&["very"]);
        let once = normalize("  I feel VERY sad  ", &set);
        assert_eq!(normalize(&once, &set), once);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        // Tokenization is whitespace-only, so "sad." is not the token "sad".
        let set = StopwordSet::from_list(&["sad"]);
        assert_eq!(normalize("Sad. but sad", &set), "sad. but");
    }

    #[test]
    fn test_split_lines_crlf() {
        assert_eq!(split_lines("one\r\ntwo\rthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("one\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("one\n\ntwo"), vec!["one", "", "two"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_nfkc() {
        // \u{FB01} (fi ligature) normalizes to "fi"
        assert_eq!(split_lines("\u{FB01}nd"), vec!["find"]);
    }
}
