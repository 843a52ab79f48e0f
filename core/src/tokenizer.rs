use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
    static ref URL_PREFIX_RE: Regex = Regex::new(r"^https?://[^/]+/").expect("valid regex");
}

/// How a text source is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenization {
    /// Maximal runs of Unicode word characters; punctuation is dropped.
    #[default]
    Words,
    /// Split on whitespace only; punctuation stays attached to its word.
    Whitespace,
}

impl Tokenization {
    pub fn apply(self, text: Option<&str>) -> Vec<String> {
        match self {
            Tokenization::Words => tokenize_opt(text),
            Tokenization::Whitespace => text.map(split_whitespace).unwrap_or_default(),
        }
    }
}

/// Tokenize text into lowercase word tokens, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Like [`tokenize`], but an absent text yields no tokens.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}

/// Lowercase whitespace-separated tokens.
pub fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Turn a page URL into readable text: drop `scheme://host/`, then break on `-` and `.`.
///
/// `https://example.com/best-seo-guide.html` becomes `best seo guide html`.
pub fn text_from_url(url: &str) -> String {
    let path = URL_PREFIX_RE.replace(url, "");
    path.split(['-', '.']).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World!-2024"), vec!["hello", "world", "2024"]);
    }

    #[test]
    fn absent_text_is_empty() {
        assert!(tokenize_opt(None).is_empty());
        assert!(Tokenization::Whitespace.apply(None).is_empty());
    }

    #[test]
    fn whitespace_mode_keeps_punctuation() {
        let toks = Tokenization::Whitespace.apply(Some("Rust, the  Book!"));
        assert_eq!(toks, vec!["rust,", "the", "book!"]);
    }

    #[test]
    fn url_without_path_is_kept() {
        assert_eq!(text_from_url("https://example.com"), "https://example com");
    }
}
