//! Processor registry for extension to processor mapping.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::config::IngestConfig;
use crate::error::{IngestError, Result};
use crate::ingest::{DocumentSource, ExtractedText, Processor};

use super::document::{DocxProcessor, PdfProcessor};
use super::text::TextProcessor;

/// Registry for document processors.
pub struct ProcessorRegistry {
    processors: Vec<Arc<dyn Processor>>,
    max_file_bytes: u64,
}

impl ProcessorRegistry {
    /// Create a registry with the text, PDF and DOCX processors.
    pub fn new(config: &IngestConfig) -> Self {
        let processors: Vec<Arc<dyn Processor>> = vec![
            Arc::new(TextProcessor::new()),
            Arc::new(PdfProcessor::new()),
            Arc::new(DocxProcessor::new()),
        ];

        Self {
            processors,
            max_file_bytes: config.max_file_bytes,
        }
    }

    /// Get a processor for the given extension.
    pub fn get_processor(&self, extension: &str) -> Option<Arc<dyn Processor>> {
        self.processors
            .iter()
            .find(|p| p.supports(extension))
            .map(Arc::clone)
    }

    /// Extract text from in-memory document content.
    pub async fn extract(&self, content: Bytes, source: &DocumentSource) -> Result<ExtractedText> {
        let processor = self
            .get_processor(&source.extension)
            .ok_or_else(|| IngestError::UnsupportedFormat(source.name.clone()))?;

        if source.size > self.max_file_bytes {
            return Err(IngestError::TooLarge {
                size: source.size,
                max: self.max_file_bytes,
            }
            .into());
        }

        debug!(
            processor = processor.name(),
            name = %source.name,
            size = source.size,
            "Extracting document text"
        );

        processor.process(content, source).await
    }

    /// Read a file from disk and extract its text.
    pub async fn extract_file(&self, path: impl AsRef<Path>) -> Result<ExtractedText> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let read_err = |e: std::io::Error| IngestError::Read {
            path: name.clone(),
            reason: e.to_string(),
        };

        let size = tokio::fs::metadata(path).await.map_err(read_err)?.len();
        let source = DocumentSource::new(name.clone(), size);

        // Reject by extension and size before reading the body
        if !self.supports(&source.extension) {
            return Err(IngestError::UnsupportedFormat(source.name.clone()).into());
        }
        if size > self.max_file_bytes {
            return Err(IngestError::TooLarge {
                size,
                max: self.max_file_bytes,
            }
            .into());
        }

        let content = tokio::fs::read(path).await.map_err(read_err)?;
        self.extract(Bytes::from(content), &source).await
    }

    /// Check if an extension is supported.
    pub fn supports(&self, extension: &str) -> bool {
        self.get_processor(extension).is_some()
    }

    /// List all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.processors
            .iter()
            .flat_map(|p| p.extensions().iter().copied())
            .collect()
    }

    /// Register a custom processor.
    pub fn register(&mut self, processor: Arc<dyn Processor>) {
        self.processors.insert(0, processor); // Insert at front for priority
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}
