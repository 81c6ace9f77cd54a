//! Backing stores for reference data records.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, StoreError};

/// The two reference data records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Alias → canonical skill dictionary
    Aliases,
    /// Category → skills dictionary
    Categories,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Aliases, RecordKind::Categories];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Aliases => f.write_str("alias dictionary"),
            RecordKind::Categories => f.write_str("category dictionary"),
        }
    }
}

/// Trait for reference data backends.
///
/// Records are exchanged as raw UTF-8 JSON so that parsing, and the fallback
/// to defaults on a bad parse, stays in one place.
pub trait ReferenceStore: Send + Sync {
    /// Read a record. Returns `Ok(None)` when the record does not exist.
    fn read(&self, record: RecordKind) -> Result<Option<String>>;

    /// Write a record, replacing any previous contents.
    fn write(&self, record: RecordKind, contents: &str) -> Result<()>;

    /// Whether the record exists.
    fn exists(&self, record: RecordKind) -> Result<bool> {
        Ok(self.read(record)?.is_some())
    }

    /// Human-readable location of a record, for logging.
    fn location(&self, record: RecordKind) -> String;

    /// Get the store name for logging.
    fn name(&self) -> &str;
}

/// File-backed store: one JSON file per record inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    aliases_file: String,
    categories_file: String,
}

impl FileStore {
    /// Create a store rooted at `dir` with the default file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let defaults = crate::config::DataConfig::default();
        Self {
            dir: dir.into(),
            aliases_file: defaults.aliases_file,
            categories_file: defaults.categories_file,
        }
    }

    /// Create a store from the `[data]` section of the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            dir: config.data_dir()?,
            aliases_file: config.data.aliases_file.clone(),
            categories_file: config.data.categories_file.clone(),
        })
    }

    /// Data directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a record.
    pub fn path(&self, record: RecordKind) -> PathBuf {
        match record {
            RecordKind::Aliases => self.dir.join(&self.aliases_file),
            RecordKind::Categories => self.dir.join(&self.categories_file),
        }
    }
}

impl ReferenceStore for FileStore {
    fn read(&self, record: RecordKind) -> Result<Option<String>> {
        let path = self.path(record);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                record: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn write(&self, record: RecordKind, contents: &str) -> Result<()> {
        let path = self.path(record);
        let write_err = |e: std::io::Error| StoreError::Write {
            record: path.display().to_string(),
            reason: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write beside the target and rename so readers never see a partial file.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).map_err(write_err)?;
        std::fs::rename(&tmp, &path).map_err(write_err)?;
        Ok(())
    }

    fn exists(&self, record: RecordKind) -> Result<bool> {
        Ok(self.path(record).is_file())
    }

    fn location(&self, record: RecordKind) -> String {
        self.path(record).display().to_string()
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// In-memory store, used by tests and embedders that ship their own data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordKind, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw record contents.
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (RecordKind, S)>,
        S: Into<String>,
    {
        Self {
            records: RwLock::new(records.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }

    /// Remove a record.
    pub fn remove(&self, record: RecordKind) -> Option<String> {
        self.records.write().remove(&record)
    }
}

impl ReferenceStore for MemoryStore {
    fn read(&self, record: RecordKind) -> Result<Option<String>> {
        Ok(self.records.read().get(&record).cloned())
    }

    fn write(&self, record: RecordKind, contents: &str) -> Result<()> {
        self.records.write().insert(record, contents.to_string());
        Ok(())
    }

    fn location(&self, record: RecordKind) -> String {
        format!("memory:{record}")
    }

    fn name(&self) -> &str {
        "memory"
    }
}
