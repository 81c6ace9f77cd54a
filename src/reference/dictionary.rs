//! Alias and category dictionary types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved bucket for skills that belong to no declared category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Mapping from alias (word, phrase or acronym) to canonical skill name.
///
/// Many aliases may point at the same canonical name. Keys are kept in
/// lexicographic order so that iteration, and therefore fuzzy tie-breaking,
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasDictionary {
    entries: BTreeMap<String, String>,
}

impl AliasDictionary {
    /// Create a dictionary from alias/canonical pairs.
    pub fn new<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(a, c)| (a.into(), c.into()))
                .collect(),
        }
    }

    /// Look up the canonical name for an alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// Whether the alias is known.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Iterate over (alias, canonical) pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    /// Iterate over aliases in order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Aliases made of two or more whitespace-separated words.
    pub fn multi_word(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(alias, _)| alias.split_whitespace().nth(1).is_some())
    }

    /// Aliases most similar to `query` by Jaro-Winkler score, best first.
    pub fn closest(&self, query: &str, limit: usize) -> Vec<(&str, f64)> {
        let query = query.to_lowercase();
        let mut scored: Vec<(&str, f64)> = self
            .aliases()
            .map(|alias| (alias, strsim::jaro_winkler(&query, alias)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        scored.truncate(limit);
        scored
    }

    /// Distinct canonical skill names.
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named category and its member skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub skills: Vec<String>,
}

/// Mapping from category name to its canonical skill names.
///
/// Categories keep their declared order, both in memory and when persisted.
/// A repeated category key replaces the earlier list in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDictionary {
    categories: Vec<Category>,
}

impl CategoryDictionary {
    /// Create a dictionary from (category, skills) pairs in declared order.
    pub fn new<I, N, S, T>(categories: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut dict = Self::default();
        for (name, skills) in categories {
            dict.insert(name.into(), skills.into_iter().map(Into::into).collect());
        }
        dict
    }

    /// Insert a category, replacing the skills of an existing one with the same name.
    pub fn insert(&mut self, name: String, skills: Vec<String>) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.skills = skills,
            None => self.categories.push(Category { name, skills }),
        }
    }

    /// Skills declared for a category.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.skills.as_slice())
    }

    /// Iterate over categories in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for CategoryDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryVisitor;

        impl<'de> Visitor<'de> for CategoryVisitor {
            type Value = CategoryDictionary;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to lists of skills")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut dict = CategoryDictionary::default();
                while let Some((name, skills)) = access.next_entry::<String, Vec<String>>()? {
                    dict.insert(name, skills);
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_map(CategoryVisitor)
    }
}
