#[cfg(feature = "pdf")]
pub mod pdf;

use std::path::Path;

use tracing::warn;

use crate::error::{EnvironmentError, ProcessError};

/// Turns a document on disk into plain text.
///
/// Implementations read at most `max_pages` pages, in page order, and join
/// the page texts with `\n`. A page without detectable text contributes an
/// empty string.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path, max_pages: usize) -> Result<String, ProcessError>;
}

/// Extracts text, degrading any failure to an empty string.
///
/// Unreadable or malformed documents are common in real inboxes; they get a
/// warning on stderr and then go through classification like any file
/// without text.
pub fn extract_or_empty(extractor: &dyn TextExtractor, path: &Path, max_pages: usize) -> String {
    match extractor.extract(path, max_pages) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to read '{}': {}", path.display(), e);
            String::new()
        }
    }
}

/// Returns the PDF extractor compiled into this build.
#[cfg(feature = "pdf")]
pub fn default_extractor() -> Result<Box<dyn TextExtractor>, EnvironmentError> {
    Ok(Box::new(pdf::PdfTextExtractor::new()))
}

/// Returns the PDF extractor compiled into this build.
#[cfg(not(feature = "pdf"))]
pub fn default_extractor() -> Result<Box<dyn TextExtractor>, EnvironmentError> {
    Err(EnvironmentError::PdfBackendUnavailable)
}
