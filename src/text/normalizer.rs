//! Job-description text cleaning.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::tokenizer::{Token, Tokenizer};
use crate::config::NormalizerConfig;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("Invalid regex"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S*@\S*\s?").expect("Invalid regex"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Cleans raw text into a lowercase, space-separated token stream.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tokenizer: Tokenizer,
    removed_stop_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            removed_stop_words: config.removed_stop_words.iter().cloned().collect(),
        }
    }

    /// Normalize raw text. Empty input gives an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let text = raw.to_lowercase();
        let text = URL_PATTERN.replace_all(&text, "");
        let text = EMAIL_PATTERN.replace_all(&text, "");
        let text = WHITESPACE_PATTERN.replace_all(&text, " ");

        let tokens = self.tokenizer.tokenize(&text);
        let total = tokens.len();
        let kept: Vec<String> = tokens
            .into_iter()
            .filter(|t| self.keeps(t))
            .map(|t| t.text)
            .collect();

        debug!(tokens = total, kept = kept.len(), "Normalized text");
        kept.join(" ")
    }

    /// Whether a token survives normalization.
    ///
    /// A stop word is dropped only when it is also listed in
    /// `removed_stop_words`; every other stop word is kept because it may sit
    /// inside a multi-word skill such as "internet of things".
    pub fn keeps(&self, token: &Token) -> bool {
        !token.is_punct()
            && !token.is_space()
            && !(token.is_stop() && self.removed_stop_words.contains(&token.text))
            && !token.like_num()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        Normalizer::default().normalize(text)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t"), "");
        assert_eq!(normalize("!!! 42 ..."), "");
    }

    #[test]
    fn test_lowercases_and_collapses() {
        assert_eq!(normalize("Senior   RUST\n\nEngineer"), "senior rust engineer");
    }

    #[test]
    fn test_strips_urls_and_emails() {
        let text = "Apply at https://example.com/jobs?id=1 or mail jobs@example.com today";
        assert_eq!(normalize(text), "apply at or mail today");
    }

    #[test]
    fn test_drops_punctuation_and_numbers() {
        assert_eq!(
            normalize("5+ years of Python, Java & C++ (required)."),
            "years of python java c++ required"
        );
    }

    #[test]
    fn test_narrow_stop_word_removal() {
        // Only the configured stop words go; "of", "and", "with" stay.
        assert_eq!(
            normalize("The team is building the Internet of Things with Go and Rust"),
            "team building internet of things with go and rust"
        );
    }

    #[test]
    fn test_removal_requires_stop_word() {
        // A listed word that is not a stop word is never removed.
        let config = NormalizerConfig {
            removed_stop_words: vec!["python".to_string(), "and".to_string()],
        };
        let normalizer = Normalizer::new(&config);
        assert_eq!(
            normalizer.normalize("the python and rust"),
            "the python rust"
        );
    }

    #[test]
    fn test_hyphenated_skill_split() {
        assert_eq!(normalize("scikit-learn and CI/CD"), "scikit learn and ci cd");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let clean = "looking for python developer with aws and machine learning experience";
        let once = normalize(clean);
        assert_eq!(once, clean);
        assert_eq!(normalize(&once), once);

        let messy = "Don't miss: Node.js, C# & K8s — 3rd-party APIs!";
        let once = normalize(messy);
        assert_eq!(normalize(&once), once);
    }
}
