//! Skill matching against the alias dictionary.
//!
//! Three strategies run over the normalized text and their hits are unioned:
//!
//! - **Phrase containment**: every multi-word alias is searched for as a
//!   substring of the whole text.
//! - **Exact n-grams**: tokens, bigrams and trigrams from the tokenizer are
//!   looked up directly.
//! - **Fuzzy n-grams**: whitespace-separated 1-3 word n-grams are compared to
//!   every alias and the best match is kept when it scores at least the
//!   configured threshold.

mod similarity;

pub use similarity::{edit_distance, process, ratio, similarity, sort_words};

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MatcherConfig;
use crate::reference::ReferenceData;
use crate::text::Tokenizer;

/// Canonical skill names found in a text.
pub type SkillSet = BTreeSet<String>;

/// Best fuzzy candidate for an n-gram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub ngram: String,
    pub alias: String,
    pub skill: String,
    pub score: u8,
}

/// An alias in comparable form.
#[derive(Debug, Clone)]
struct FuzzyEntry {
    alias: String,
    processed: String,
    sorted: String,
    len: usize,
}

/// Extracts canonical skill names from normalized text.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    data: Arc<ReferenceData>,
    tokenizer: Tokenizer,
    entries: Vec<FuzzyEntry>,
    config: MatcherConfig,
}

impl SkillMatcher {
    pub fn new(data: Arc<ReferenceData>, config: MatcherConfig) -> Self {
        let entries = data
            .aliases()
            .aliases()
            .map(|alias| {
                let processed = process(alias);
                FuzzyEntry {
                    alias: alias.to_string(),
                    sorted: sort_words(&processed),
                    len: processed.chars().count(),
                    processed,
                }
            })
            .filter(|e| e.len > 0)
            .collect();

        Self {
            data,
            tokenizer: Tokenizer::new(),
            entries,
            config,
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Extract the canonical skills mentioned in `text`.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        if text.trim().is_empty() {
            return SkillSet::new();
        }

        let phrase = self.phrase_matches(text);
        let exact = self.exact_matches(text);
        let fuzzy: SkillSet = if self.config.fuzzy_enabled {
            self.fuzzy_matches(text).into_iter().map(|m| m.skill).collect()
        } else {
            SkillSet::new()
        };

        debug!(
            phrase = phrase.len(),
            exact = exact.len(),
            fuzzy = fuzzy.len(),
            "Skill matching complete"
        );

        phrase
            .into_iter()
            .chain(exact)
            .chain(fuzzy)
            .collect()
    }

    /// Skills whose multi-word aliases occur anywhere in the text.
    pub fn phrase_matches(&self, text: &str) -> SkillSet {
        let haystack = text.to_lowercase();
        self.data
            .aliases()
            .multi_word()
            .filter(|(alias, _)| haystack.contains(&alias.to_lowercase()))
            .map(|(_, skill)| skill.to_string())
            .collect()
    }

    /// Skills whose aliases equal a token, bigram or trigram of the text.
    pub fn exact_matches(&self, text: &str) -> SkillSet {
        let tokens = self.tokenizer.words(text);
        let aliases = self.data.aliases();
        let mut skills = SkillSet::new();

        for i in 0..tokens.len() {
            for n in 1..=3 {
                let Some(gram) = tokens.get(i..i + n) else {
                    break;
                };
                if let Some(skill) = aliases.get(&gram.join(" ").to_lowercase()) {
                    skills.insert(skill.to_string());
                }
            }
        }

        skills
    }

    /// Accepted fuzzy matches, one per n-gram at most.
    pub fn fuzzy_matches(&self, text: &str) -> Vec<FuzzyMatch> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let threshold = self.config.fuzzy_threshold;

        word_ngrams(&words)
            .into_iter()
            .filter(|ngram| ngram.chars().count() >= self.config.min_ngram_chars)
            .filter_map(|ngram| {
                let (alias, score) = self.best_match(&ngram)?;
                if score < threshold {
                    return None;
                }
                let skill = self.data.aliases().get(alias)?.to_string();
                Some(FuzzyMatch {
                    ngram,
                    alias: alias.to_string(),
                    skill,
                    score,
                })
            })
            .collect()
    }

    /// The single best-scoring alias for `query`. Ties go to the
    /// alphabetically first alias.
    pub fn best_match(&self, query: &str) -> Option<(&str, u8)> {
        let query = process(query);
        if query.is_empty() {
            return None;
        }
        let query_sorted = sort_words(&query);
        let query_len = query.chars().count();

        let mut best: Option<(&FuzzyEntry, u8)> = None;
        for entry in &self.entries {
            let bound = similarity::ratio_bound(query_len, entry.len);
            if best.is_some_and(|(_, score)| bound <= score) {
                continue;
            }

            let score = ratio(&query, &entry.processed).max(ratio(&query_sorted, &entry.sorted));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((entry, score));
                if score == 100 {
                    break;
                }
            }
        }

        best.map(|(entry, score)| (entry.alias.as_str(), score))
    }
}

/// All contiguous 1-, 2- and 3-word n-grams.
fn word_ngrams(words: &[&str]) -> Vec<String> {
    let mut ngrams = Vec::with_capacity(words.len() * 3);
    for n in 1..=3 {
        ngrams.extend(words.windows(n).map(|w| w.join(" ")));
    }
    ngrams
}
