//! Error types for jdskill.

use thiserror::Error;

/// Main error type for jdskill operations.
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference store error: {0}")]
    Store(#[from] StoreError),

    #[error("Ingestion error: {0}")]
    Ingest(#[from] IngestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Path expansion failed: {0}")]
    PathExpansion(String),
}

/// Reference data store errors.
///
/// These only surface from explicit store operations such as initialization.
/// Loading reference data never fails; it falls back to the built-in defaults.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {record}: {reason}")]
    Read { record: String, reason: String },

    #[error("Failed to write {record}: {reason}")]
    Write { record: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document ingestion errors (file-to-text extraction).
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported file format: {0}. Please upload a .txt, .pdf, or .docx file.")]
    UnsupportedFormat(String),

    #[error("Error reading file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },
}

/// Result type alias for jdskill operations.
pub type Result<T> = std::result::Result<T, SkillError>;
