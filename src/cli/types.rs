//! CLI response types for commands that do not print a pipeline report.

use serde::{Deserialize, Serialize};

/// Result of `jdskill init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitResult {
    pub data_dir: String,
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Result of `jdskill normalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub normalized_text: String,
    pub token_count: usize,
}

/// One category and its declared skills, for `jdskill categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListing {
    pub category: String,
    pub skills: Vec<String>,
}

/// Result of `jdskill lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub alias: String,
    /// Canonical skill when the alias is known exactly
    pub skill: Option<String>,
    /// Category of the resolved skill
    pub category: Option<String>,
    /// Best fuzzy candidate and its score (0-100)
    pub fuzzy: Option<FuzzyCandidate>,
    /// Nearby aliases when nothing matched exactly
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyCandidate {
    pub alias: String,
    pub skill: String,
    pub score: u8,
    pub accepted: bool,
}
