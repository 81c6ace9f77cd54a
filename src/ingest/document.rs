//! Processors for PDF and DOCX documents.

use async_trait::async_trait;
use bytes::Bytes;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::ingest::{DocumentSource, ExtractedText, Processor};

/// Processor for `.pdf` files.
#[derive(Debug, Default)]
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for PdfProcessor {
    async fn process(&self, content: Bytes, source: &DocumentSource) -> Result<ExtractedText> {
        // pdf-extract is synchronous and CPU-bound
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&content)
                .map(|text| join_lines(&text))
                .map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| IngestError::Pdf(format!("Task join error: {}", e)))?
        .map_err(|e| {
            warn!(name = %source.name, error = %e, "Failed to extract PDF text");
            IngestError::Pdf(e)
        })?;

        let extracted = ExtractedText::new(text, "pdf");
        debug!(
            name = %source.name,
            word_count = extracted.metadata.word_count,
            "Processed PDF"
        );
        Ok(extracted)
    }

    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

/// Trim every line and drop blank ones. Page breaks come out as form feeds
/// and runs of empty lines, none of which carry skill text.
fn join_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{c}'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Processor for `.docx` files.
#[derive(Debug, Default)]
pub struct DocxProcessor;

impl DocxProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for DocxProcessor {
    async fn process(&self, content: Bytes, source: &DocumentSource) -> Result<ExtractedText> {
        let text = tokio::task::spawn_blocking(move || {
            let docx = docx_rs::read_docx(&content).map_err(|e| e.to_string())?;
            let mut lines = Vec::new();
            for child in &docx.document.children {
                collect_lines(child, &mut lines);
            }
            Ok::<_, String>(lines.join("\n"))
        })
        .await
        .map_err(|e| IngestError::Docx(format!("Task join error: {}", e)))?
        .map_err(|e| {
            warn!(name = %source.name, error = %e, "Failed to read DOCX");
            IngestError::Docx(e)
        })?;

        let extracted = ExtractedText::new(text, "docx");
        debug!(
            name = %source.name,
            word_count = extracted.metadata.word_count,
            "Processed DOCX"
        );
        Ok(extracted)
    }

    fn extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }
}

/// One line per paragraph; a table row becomes one line of its cells.
fn collect_lines(child: &DocumentChild, lines: &mut Vec<String>) {
    match child {
        DocumentChild::Paragraph(para) => lines.push(paragraph_text(&para.children)),
        DocumentChild::Table(table) => {
            for TableChild::TableRow(row) in &table.rows {
                let cells: Vec<String> = row
                    .cells
                    .iter()
                    .map(|TableRowChild::TableCell(cell)| {
                        cell.children
                            .iter()
                            .filter_map(|content| match content {
                                TableCellContent::Paragraph(p) => Some(paragraph_text(&p.children)),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .filter(|cell| !cell.trim().is_empty())
                    .collect();
                if !cells.is_empty() {
                    lines.push(cells.join(" | "));
                }
            }
        }
        _ => {}
    }
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for part in &run.children {
                    if let RunChild::Text(t) = part {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;
    use std::sync::Arc;

    fn docx_bytes(paragraphs: &[&str]) -> Bytes {
        let mut doc = Docx::new();
        for text in paragraphs {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        doc.build().pack(&mut buf).unwrap();
        Bytes::from(buf.into_inner())
    }

    #[test]
    fn test_supports() {
        assert!(PdfProcessor::new().supports("pdf"));
        assert!(!PdfProcessor::new().supports("txt"));
        assert!(DocxProcessor::new().supports("docx"));
        assert!(!DocxProcessor::new().supports("doc"));
    }

    #[test]
    fn test_join_lines() {
        let text = "  Senior Engineer \n\n\n\u{c}Rust, Go\n   \n";
        assert_eq!(join_lines(text), "Senior Engineer\nRust, Go");
    }

    #[tokio::test]
    async fn test_docx_paragraphs() {
        let bytes = docx_bytes(&["Backend Engineer", "Python and AWS required"]);
        let source = DocumentSource::new("jd.docx", bytes.len() as u64);

        let result = DocxProcessor::new().process(bytes, &source).await.unwrap();
        assert_eq!(result.text, "Backend Engineer\nPython and AWS required");
        assert_eq!(result.metadata.format, "docx");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_docx_processed_concurrently() {
        let processor = Arc::new(DocxProcessor::new());
        let handles: Vec<_> = ["Rust", "Kubernetes", "PostgreSQL"]
            .into_iter()
            .map(|skill| {
                let processor = processor.clone();
                tokio::spawn(async move {
                    let bytes = docx_bytes(&[skill]);
                    let source = DocumentSource::new("jd.docx", bytes.len() as u64);
                    processor.process(bytes, &source).await
                })
            })
            .collect();

        let mut texts = Vec::new();
        for handle in handles {
            texts.push(handle.await.unwrap().unwrap().text);
        }
        assert_eq!(texts, vec!["Rust", "Kubernetes", "PostgreSQL"]);
    }

    #[tokio::test]
    async fn test_corrupt_docx() {
        let source = DocumentSource::new("broken.docx", 8);
        let err = DocxProcessor::new()
            .process(Bytes::from_static(b"not a zip"), &source)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Error reading DOCX"));
    }

    #[tokio::test]
    async fn test_corrupt_pdf() {
        let source = DocumentSource::new("broken.pdf", 8);
        let err = PdfProcessor::new()
            .process(Bytes::from_static(b"not a pdf"), &source)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Error reading PDF"));
    }
}
