//! The normalize → extract → categorize pipeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::categorizer::{CategorizedSkills, Categorizer};
use crate::config::Config;
use crate::error::Result;
use crate::matcher::{SkillMatcher, SkillSet};
use crate::reference::{FileStore, ReferenceData, ReferenceStore};
use crate::text::Normalizer;

/// Number of skills in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Everything produced for one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    /// Text after normalization
    pub normalized_text: String,
    /// Extracted canonical skills, alphabetical
    pub skills: Vec<String>,
    /// Skills grouped by category
    pub categories: CategorizedSkills,
    /// Per-category counts, in category order
    pub distribution: Vec<CategoryCount>,
}

impl SkillReport {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Runs the three pipeline stages against shared reference data.
///
/// Every call is independent; the only shared state is the read-only
/// [`ReferenceData`], so a pipeline can be used from several threads.
#[derive(Debug, Clone)]
pub struct SkillPipeline {
    config: Config,
    data: Arc<ReferenceData>,
    normalizer: Normalizer,
    matcher: SkillMatcher,
    categorizer: Categorizer,
}

impl SkillPipeline {
    /// Build a pipeline over already loaded reference data.
    pub fn new(data: Arc<ReferenceData>, config: Config) -> Self {
        let normalizer = Normalizer::new(&config.normalizer);
        let matcher = SkillMatcher::new(Arc::clone(&data), config.matcher.clone());
        let categorizer = Categorizer::new(data.categories());

        debug!(
            aliases = data.aliases().len(),
            categories = data.categories().len(),
            fuzzy_threshold = config.matcher.fuzzy_threshold,
            "Skill pipeline ready"
        );

        Self {
            config,
            data,
            normalizer,
            matcher,
            categorizer,
        }
    }

    /// Build a pipeline from the file store named in the configuration.
    ///
    /// Missing or malformed records fall back to the built-in defaults.
    pub fn from_config(config: Config) -> Result<Self> {
        let store = FileStore::from_config(&config)?;
        let data = ReferenceData::load(&store);
        if !data.defaulted().is_empty() {
            info!(
                dir = %store.dir().display(),
                defaulted = ?data.defaulted(),
                "Using built-in reference data"
            );
        }
        Ok(Self::new(Arc::new(data), config))
    }

    /// Replace the reference data with a fresh load from `store`.
    pub fn reload(&mut self, store: &dyn ReferenceStore) {
        *self = Self::new(Arc::new(ReferenceData::load(store)), self.config.clone());
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn extract_skills(&self, normalized: &str) -> SkillSet {
        self.matcher.extract_skills(normalized)
    }

    pub fn categorize(&self, skills: &SkillSet) -> CategorizedSkills {
        self.categorizer.categorize(skills)
    }

    /// Run all three stages on raw text.
    pub fn analyze(&self, raw: &str) -> SkillReport {
        let normalized_text = self.normalize(raw);
        let skills = self.extract_skills(&normalized_text);
        let categories = self.categorize(&skills);
        let distribution = categories
            .counts()
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();

        debug!(
            chars = raw.len(),
            skills = skills.len(),
            categories = categories.len(),
            "Analyzed text"
        );

        SkillReport {
            normalized_text,
            skills: skills.into_iter().collect(),
            categories,
            distribution,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data(&self) -> &Arc<ReferenceData> {
        &self.data
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }
}

impl Default for SkillPipeline {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceData::builtin()), Config::default())
    }
}
