//! jdskill: skill extraction for job descriptions
//!
//! Turns free-form job-description text into a set of canonical skill names
//! grouped into display categories. The pipeline is
//! normalize → extract → categorize, driven by two reference dictionaries
//! (alias → skill and category → skills) that are loaded once and shared.

pub mod categorizer;
pub mod config;
pub mod error;
pub mod ingest;
pub mod matcher;
pub mod pipeline;
pub mod reference;
pub mod text;

pub use categorizer::{CategorizedSkills, Categorizer};
pub use config::Config;
pub use error::{ConfigError, IngestError, Result, SkillError, StoreError};
pub use ingest::{DocumentSource, ExtractedText, Processor, ProcessorRegistry};
pub use matcher::{FuzzyMatch, SkillMatcher, SkillSet};
pub use pipeline::{CategoryCount, SkillPipeline, SkillReport};
pub use reference::{
    AliasDictionary, CategoryDictionary, FileStore, InitReport, MemoryStore, RecordKind,
    ReferenceData, ReferenceStore, UNCATEGORIZED,
};
pub use text::{Normalizer, Token, Tokenizer};
