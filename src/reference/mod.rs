//! Reference data: the alias and category dictionaries.
//!
//! Reference data is loaded once into a [`ReferenceData`] value and shared
//! read-only by the matcher and categorizer. Loading is fail-soft: a missing
//! or malformed record is replaced by the built-in default and the problem is
//! only logged. Creating records on disk is a separate, explicit step
//! ([`ReferenceData::initialize`]).

mod defaults;
mod dictionary;
mod store;

pub use defaults::{default_aliases, default_categories};
pub use dictionary::{AliasDictionary, Category, CategoryDictionary, UNCATEGORIZED};
pub use store::{FileStore, MemoryStore, RecordKind, ReferenceStore};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Outcome of [`ReferenceData::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Records written from the built-in defaults
    pub created: Vec<RecordKind>,
    /// Records that already existed and were left untouched
    pub existing: Vec<RecordKind>,
}

/// Loaded alias and category dictionaries.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    aliases: AliasDictionary,
    categories: CategoryDictionary,
    defaulted: Vec<RecordKind>,
}

impl ReferenceData {
    /// Build reference data from in-memory dictionaries.
    pub fn new(aliases: AliasDictionary, categories: CategoryDictionary) -> Self {
        Self {
            aliases,
            categories,
            defaulted: Vec::new(),
        }
    }

    /// The built-in dictionaries.
    pub fn builtin() -> Self {
        Self {
            aliases: default_aliases(),
            categories: default_categories(),
            defaulted: RecordKind::ALL.to_vec(),
        }
    }

    /// Load both dictionaries from a store, substituting defaults for any
    /// record that is missing or cannot be parsed.
    pub fn load(store: &dyn ReferenceStore) -> Self {
        let mut defaulted = Vec::new();

        let aliases = load_record(store, RecordKind::Aliases).unwrap_or_else(|| {
            defaulted.push(RecordKind::Aliases);
            default_aliases()
        });
        let categories = load_record(store, RecordKind::Categories).unwrap_or_else(|| {
            defaulted.push(RecordKind::Categories);
            default_categories()
        });

        debug!(
            store = store.name(),
            aliases = aliases.len(),
            categories = categories.len(),
            defaulted = defaulted.len(),
            "Reference data loaded"
        );

        Self {
            aliases,
            categories,
            defaulted,
        }
    }

    /// Create any missing record in the store from the built-in defaults.
    ///
    /// Existing records are never rewritten, so running this repeatedly is
    /// harmless. Records that exist but are malformed are also left alone.
    pub fn initialize(store: &dyn ReferenceStore) -> Result<InitReport> {
        let mut report = InitReport::default();

        for record in RecordKind::ALL {
            if store.exists(record)? {
                report.existing.push(record);
                continue;
            }

            let contents = match record {
                RecordKind::Aliases => to_pretty_json(&default_aliases())?,
                RecordKind::Categories => to_pretty_json(&default_categories())?,
            };
            store.write(record, &contents)?;

            info!(
                store = store.name(),
                location = %store.location(record),
                "Created default {}",
                record
            );
            report.created.push(record);
        }

        Ok(report)
    }

    pub fn aliases(&self) -> &AliasDictionary {
        &self.aliases
    }

    pub fn categories(&self) -> &CategoryDictionary {
        &self.categories
    }

    /// Records that came from the built-in defaults rather than the store.
    pub fn defaulted(&self) -> &[RecordKind] {
        &self.defaulted
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load the alias dictionary from a store, falling back to the defaults.
pub fn load_aliases(store: &dyn ReferenceStore) -> AliasDictionary {
    load_record(store, RecordKind::Aliases).unwrap_or_else(default_aliases)
}

/// Load the category dictionary from a store, falling back to the defaults.
pub fn load_categories(store: &dyn ReferenceStore) -> CategoryDictionary {
    load_record(store, RecordKind::Categories).unwrap_or_else(default_categories)
}

/// Read and parse one record. `None` means the caller should use defaults.
fn load_record<T: DeserializeOwned>(store: &dyn ReferenceStore, record: RecordKind) -> Option<T> {
    let contents = match store.read(record) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!(location = %store.location(record), "No {} found, using defaults", record);
            return None;
        }
        Err(e) => {
            warn!(location = %store.location(record), error = %e, "Failed to read {}, using defaults", record);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(location = %store.location(record), error = %e, "Malformed {}, using defaults", record);
            None
        }
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_records_uses_defaults() {
        let store = MemoryStore::new();
        let data = ReferenceData::load(&store);

        assert_eq!(data.aliases(), &default_aliases());
        assert_eq!(data.categories(), &default_categories());
        assert_eq!(data.defaulted(), &RecordKind::ALL[..]);
    }

    #[test]
    fn test_load_does_not_write() {
        let store = MemoryStore::new();
        let _ = ReferenceData::load(&store);
        assert!(!store.exists(RecordKind::Aliases).unwrap());
        assert!(!store.exists(RecordKind::Categories).unwrap());
    }

    #[test]
    fn test_load_corrupt_record_falls_back() {
        let store = MemoryStore::with_records([
            (RecordKind::Aliases, "{not json"),
            (RecordKind::Categories, r#"{"Tools": ["git"]}"#),
        ]);
        let data = ReferenceData::load(&store);

        assert_eq!(data.aliases(), &default_aliases());
        assert_eq!(data.categories().len(), 1);
        assert_eq!(data.defaulted(), &[RecordKind::Aliases]);
    }

    #[test]
    fn test_load_wrong_shape_falls_back() {
        let store = MemoryStore::with_records([(RecordKind::Aliases, r#"["python"]"#)]);
        assert_eq!(load_aliases(&store), default_aliases());
    }

    #[test]
    fn test_load_categories_falls_back() {
        assert_eq!(load_categories(&MemoryStore::new()), default_categories());

        for malformed in ["{not json", r#"["Tools"]"#, r#"{"Tools": "git"}"#] {
            let store = MemoryStore::with_records([(RecordKind::Categories, malformed)]);
            assert_eq!(load_categories(&store), default_categories(), "{malformed}");
        }

        let store = MemoryStore::with_records([(RecordKind::Categories, r#"{"Tools": ["git"]}"#)]);
        let categories = load_categories(&store);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories.get("Tools"), Some(&["git".to_string()][..]));
    }

    #[test]
    fn test_load_custom_values_pass_through() {
        // Values are not validated beyond parsing.
        let store = MemoryStore::with_records([(RecordKind::Aliases, r#"{"py": ""}"#)]);
        let aliases = load_aliases(&store);
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("py"), Some(""));
    }

    #[test]
    fn test_initialize_creates_then_is_idempotent() {
        let store = MemoryStore::new();

        let first = ReferenceData::initialize(&store).unwrap();
        assert_eq!(first.created, RecordKind::ALL.to_vec());
        assert!(first.existing.is_empty());
        let written = store.read(RecordKind::Categories).unwrap().unwrap();

        let second = ReferenceData::initialize(&store).unwrap();
        assert!(second.created.is_empty());
        assert_eq!(second.existing, RecordKind::ALL.to_vec());
        assert_eq!(store.read(RecordKind::Categories).unwrap().unwrap(), written);
    }

    #[test]
    fn test_initialize_keeps_user_records() {
        let store = MemoryStore::with_records([(RecordKind::Aliases, r#"{"py": "python"}"#)]);
        let report = ReferenceData::initialize(&store).unwrap();

        assert_eq!(report.created, vec![RecordKind::Categories]);
        assert_eq!(load_aliases(&store).len(), 1);
    }

    #[test]
    fn test_initialized_records_parse_back_to_defaults() {
        let store = MemoryStore::new();
        ReferenceData::initialize(&store).unwrap();

        let data = ReferenceData::load(&store);
        assert!(data.defaulted().is_empty());
        assert_eq!(data.aliases(), &default_aliases());
        assert_eq!(data.categories(), &default_categories());

        let raw = store.read(RecordKind::Categories).unwrap().unwrap();
        assert!(raw.contains("\"Uncategorized\": []"));
    }
}
