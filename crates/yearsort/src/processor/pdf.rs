use std::path::Path;

use crate::error::ProcessError;
use crate::processor::TextExtractor;

/// Text extraction for PDFs with an embedded text layer, backed by lopdf.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path, max_pages: usize) -> Result<String, ProcessError> {
        let _span = tracing::debug_span!("processor.pdf", max_pages).entered();

        let pdf_bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = lopdf::Document::load_mem(&pdf_bytes)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to load PDF: {}", e)))?;

        Ok(extract_first_pages(&doc, max_pages))
    }
}

/// Concatenates the text of the first `max_pages` pages, one line break
/// between pages. Pages lopdf cannot decode count as empty.
fn extract_first_pages(doc: &lopdf::Document, max_pages: usize) -> String {
    let pages = doc.get_pages();
    tracing::debug!(total_pages = pages.len(), "loaded PDF");

    let texts: Vec<String> = pages
        .keys()
        .take(max_pages)
        .map(|&page_num| doc.extract_text(&[page_num]).unwrap_or_default())
        .collect();

    texts.join("\n")
}
