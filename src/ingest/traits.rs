//! Processor trait definitions and common types.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The document being ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    /// File name or path, used in messages
    pub name: String,
    /// Lowercased extension without the dot, empty if none
    pub extension: String,
    /// Size in bytes
    pub size: u64,
}

impl DocumentSource {
    /// Describe a document by name and size.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let extension = Path::new(&name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self {
            name,
            extension,
            size,
        }
    }
}

/// Text extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Full extracted text
    pub text: String,
    /// Extracted metadata
    pub metadata: ContentMetadata,
}

impl ExtractedText {
    /// Wrap text, computing word and character counts.
    pub fn new(text: String, format: &str) -> Self {
        let metadata = ContentMetadata::from_text(&text, format);
        Self { text, metadata }
    }

    /// First `max_chars` characters, with an ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.text[..cut]),
            None => self.text.clone(),
        }
    }
}

/// Metadata gathered during extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Source format (txt, pdf, docx)
    pub format: String,
    /// Word count
    pub word_count: usize,
    /// Character count
    pub char_count: usize,
}

impl ContentMetadata {
    pub fn from_text(text: &str, format: &str) -> Self {
        Self {
            format: format.to_string(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
        }
    }
}

/// Trait for document processors.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Extract the text of a document.
    async fn process(&self, content: Bytes, source: &DocumentSource) -> Result<ExtractedText>;

    /// File extensions this processor handles, lowercase without the dot.
    fn extensions(&self) -> &[&str];

    /// Check if this processor handles the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }

    /// Get the processor name for logging.
    fn name(&self) -> &str;
}
