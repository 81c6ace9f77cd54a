//! Plain text processor.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::ingest::{DocumentSource, ExtractedText, Processor};

/// Processor for `.txt` files.
#[derive(Debug, Default)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for TextProcessor {
    async fn process(&self, content: Bytes, source: &DocumentSource) -> Result<ExtractedText> {
        // Invalid UTF-8 sequences are replaced rather than rejected
        let text = String::from_utf8_lossy(&content).into_owned();

        debug!(name = %source.name, text_len = text.len(), "Processed text file");

        Ok(ExtractedText::new(text, "txt"))
    }

    fn extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }
}
