//! Document ingestion: turning uploaded files into plain text.
//!
//! Processors are selected by file extension:
//! - Text: `.txt`
//! - Documents: `.pdf` and `.docx`
//!
//! The [`ProcessorRegistry`] enforces the configured size limit and reports
//! any other extension as an unsupported format.

mod document;
mod registry;
mod text;
mod traits;

pub use document::{DocxProcessor, PdfProcessor};
pub use registry::ProcessorRegistry;
pub use text::TextProcessor;
pub use traits::*;
