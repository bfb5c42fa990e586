use std::path::PathBuf;

use crate::classifier::NO_YEAR_FOLDER;
use crate::runlog::ProcessingRecord;
use crate::storage::Outcome;

/// State of one document as it moves through the pipeline.
pub struct DocumentContext {
    // Input
    pub source_path: PathBuf,

    // Step 1 result, empty when extraction failed
    pub text: String,

    // Step 2 result
    pub year: Option<String>,

    // Step 3 result
    pub destination: Option<PathBuf>,
}

impl DocumentContext {
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            source_path,
            text: String::new(),
            year: None,
            destination: None,
        }
    }

    /// Year folder for this document; the sentinel until a year is found.
    pub fn folder(&self) -> &str {
        self.year.as_deref().unwrap_or(NO_YEAR_FOLDER)
    }

    pub fn into_record(self, outcome: Outcome) -> ProcessingRecord {
        let year_or_sentinel = self.folder().to_string();
        ProcessingRecord {
            source_path: self.source_path,
            year_or_sentinel,
            outcome,
        }
    }
}
