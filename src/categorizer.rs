//! Category assignment for extracted skills.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::{Category, CategoryDictionary, UNCATEGORIZED};

/// Skills grouped by category.
///
/// Groups follow the category declaration order and only non-empty groups
/// are present. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedSkills(CategoryDictionary);

impl CategorizedSkills {
    /// Skills in a category, if the category has any.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.names()
    }

    /// (category, number of skills) pairs in display order.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.0
            .iter()
            .map(|c| (c.name.as_str(), c.skills.len()))
            .collect()
    }

    /// Total number of categorized skills.
    pub fn total(&self) -> usize {
        self.0.iter().map(|c| c.skills.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps canonical skill names to categories through a reverse index.
#[derive(Debug, Clone)]
pub struct Categorizer {
    /// Category names in declared order, "Uncategorized" included.
    order: Vec<String>,
    /// Lowercased skill -> index into `order`.
    index: HashMap<String, usize>,
    uncategorized: usize,
}

impl Categorizer {
    /// Build the reverse index. When a skill is listed under several
    /// categories the first declared category wins.
    pub fn new(categories: &CategoryDictionary) -> Self {
        let mut order: Vec<String> = categories.names().map(str::to_string).collect();
        let uncategorized = match order.iter().position(|name| name == UNCATEGORIZED) {
            Some(pos) => pos,
            None => {
                order.push(UNCATEGORIZED.to_string());
                order.len() - 1
            }
        };

        let mut index = HashMap::new();
        for (position, category) in categories.iter().enumerate() {
            for skill in &category.skills {
                let key = skill.to_lowercase();
                if let Some(&owner) = index.get(&key) {
                    if owner != position {
                        debug!(
                            skill = %skill,
                            kept = %order[owner],
                            ignored = %category.name,
                            "Skill listed in more than one category"
                        );
                    }
                    continue;
                }
                index.insert(key, position);
            }
        }

        Self {
            order,
            index,
            uncategorized,
        }
    }

    /// Category of a single skill, "Uncategorized" when unknown.
    pub fn category_of(&self, skill: &str) -> &str {
        let position = self
            .index
            .get(&skill.to_lowercase())
            .copied()
            .unwrap_or(self.uncategorized);
        &self.order[position]
    }

    /// Group skills by category, keeping each skill's input order.
    pub fn categorize<I, S>(&self, skills: I) -> CategorizedSkills
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); self.order.len()];
        for skill in skills {
            let skill = skill.as_ref();
            let position = self
                .index
                .get(&skill.to_lowercase())
                .copied()
                .unwrap_or(self.uncategorized);
            buckets[position].push(skill.to_string());
        }

        let grouped = CategoryDictionary::new(
            self.order
                .iter()
                .zip(buckets)
                .filter(|(_, skills)| !skills.is_empty())
                .map(|(name, skills)| (name.clone(), skills)),
        );

        debug!(categories = grouped.len(), "Categorized skills");
        CategorizedSkills(grouped)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(&crate::reference::default_categories())
    }
}
