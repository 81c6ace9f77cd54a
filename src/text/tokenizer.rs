//! Rule-based word tokenizer.
//!
//! Text is split on whitespace and every chunk is then peeled from the
//! outside in: leading punctuation is split off as prefixes, trailing
//! punctuation and English contractions as suffixes, and what remains is
//! split on infix hyphens, slashes and commas. Symbols that belong to skill
//! names are never peeled, so `c++`, `c#`, `node.js` and `asp.net` survive
//! as single tokens.

use super::lexicon;

const PREFIX_CHARS: &[char] = &[
    '(', '[', '{', '<', '"', '\'', '`', '“', '‘', '«', '*', '$', '£', '€', '¥', '§', '%', '=',
    '+', '-', '–', '—', '#', '&', '!', '?', ',', ';', ':', '.', '…', '/', '~', '_',
];

const SUFFIX_CHARS: &[char] = &[
    ')', ']', '}', '>', '"', '\'', '”', '’', '»', '*', '.', ',', ';', ':', '!', '?', '…', '%',
    '-', '–', '—', '&', '_', '/',
];

const CONTRACTIONS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// A single token produced by the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Made only of punctuation or symbol characters.
    pub fn is_punct(&self) -> bool {
        !self.text.is_empty()
            && self
                .text
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
    }

    /// Made only of whitespace.
    pub fn is_space(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    pub fn like_num(&self) -> bool {
        lexicon::like_num(&self.text)
    }

    pub fn is_stop(&self) -> bool {
        lexicon::is_stop_word(&self.text)
    }
}

/// Splits text into word, punctuation and contraction tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text`. Token order follows the input.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }
        tokens
    }

    /// Tokenize and return only the token texts.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

fn split_chunk(chunk: &str, out: &mut Vec<Token>) {
    let mut rest = chunk;
    let mut suffixes = Vec::new();

    while !rest.is_empty() && !is_atomic(rest) {
        if let Some(c) = rest.chars().next().filter(|c| PREFIX_CHARS.contains(c)) {
            let (head, tail) = rest.split_at(c.len_utf8());
            out.push(Token::new(head));
            rest = tail;
        } else if let Some(len) = suffix_len(rest) {
            let (head, tail) = rest.split_at(rest.len() - len);
            suffixes.push(tail);
            rest = head;
        } else {
            break;
        }
    }

    if !rest.is_empty() {
        split_infixes(rest, out);
    }
    out.extend(suffixes.into_iter().rev().map(Token::new));
}

/// Single characters and bare contractions are never split further.
fn is_atomic(s: &str) -> bool {
    s.chars().nth(1).is_none() || CONTRACTIONS.contains(&s)
}

fn suffix_len(s: &str) -> Option<usize> {
    if let Some(contraction) = CONTRACTIONS
        .iter()
        .find(|c| s.len() > c.len() && s.ends_with(*c))
    {
        return Some(contraction.len());
    }

    let mut chars = s.chars().rev();
    let last = chars.next()?;
    if SUFFIX_CHARS.contains(&last) {
        return Some(last.len_utf8());
    }
    // "5+" splits, "c++" does not
    if last == '+' && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        return Some(1);
    }
    None
}

fn split_infixes(s: &str, out: &mut Vec<Token>) {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start = 0;

    for window in chars.windows(3) {
        let [(_, prev), (pos, c), (_, next)] = [window[0], window[1], window[2]];
        if !is_infix(prev, c, next) {
            continue;
        }
        if pos > start {
            out.push(Token::new(&s[start..pos]));
        }
        let end = pos + c.len_utf8();
        out.push(Token::new(&s[pos..end]));
        start = end;
    }

    if start < s.len() {
        out.push(Token::new(&s[start..]));
    }
}

fn is_infix(prev: char, c: char, next: char) -> bool {
    match c {
        '-' if prev.is_ascii_digit() && next.is_ascii_digit() => true,
        '-' | '–' | '—' | '/' | ':' | '<' | '>' | '=' => {
            prev.is_alphanumeric() && next.is_alphabetic()
        }
        ',' => prev.is_alphabetic() && next.is_alphabetic(),
        '+' | '*' | '^' => prev.is_ascii_digit() && next.is_ascii_digit(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        Tokenizer::new().words(text)
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(words("  python   and\trust\n"), vec!["python", "and", "rust"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(words("python, java."), vec!["python", ",", "java", "."]);
        assert_eq!(words("(aws)"), vec!["(", "aws", ")"]);
        assert_eq!(words("\"docker\"!"), vec!["\"", "docker", "\"", "!"]);
    }

    #[test]
    fn test_skill_symbols_kept() {
        assert_eq!(words("c++ c# f#"), vec!["c++", "c#", "f#"]);
        assert_eq!(words("node.js, asp.net."), vec!["node.js", ",", "asp.net", "."]);
        assert_eq!(words("c++."), vec!["c++", "."]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(words("don't"), vec!["do", "n't"]);
        assert_eq!(words("team's"), vec!["team", "'s"]);
        assert_eq!(words("we're"), vec!["we", "'re"]);
        assert_eq!(words("it's."), vec!["it", "'s", "."]);
        assert_eq!(words("n't 's"), vec!["n't", "'s"]);
    }

    #[test]
    fn test_infixes() {
        assert_eq!(words("scikit-learn"), vec!["scikit", "-", "learn"]);
        assert_eq!(words("ci/cd"), vec!["ci", "/", "cd"]);
        assert_eq!(words("python,java"), vec!["python", ",", "java"]);
        assert_eq!(words("3-5"), vec!["3", "-", "5"]);
        assert_eq!(words("24/7"), vec!["24/7"]);
        assert_eq!(words("1,000"), vec!["1,000"]);
    }

    #[test]
    fn test_digit_plus() {
        assert_eq!(words("5+ years"), vec!["5", "+", "years"]);
    }

    #[test]
    fn test_token_flags() {
        assert!(Token::new("--").is_punct());
        assert!(Token::new("+").is_punct());
        assert!(!Token::new("c++").is_punct());
        assert!(Token::new(" ").is_space());
        assert!(Token::new("42").like_num());
        assert!(Token::new("the").is_stop());
        assert!(!Token::new("rust").is_stop());
    }
}
