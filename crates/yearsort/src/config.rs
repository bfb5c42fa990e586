use std::path::PathBuf;

use crate::classifier::{DEFAULT_FALLBACK_PATTERN, DEFAULT_LABEL_PATTERN};
use crate::storage::PlaceMode;

pub const DEFAULT_DESTINATION_DIR: &str = "saida_por_ano";
pub const DEFAULT_MAX_PAGES: usize = 3;

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub recursive: bool,
    pub mode: PlaceMode,
    pub max_pages: usize,
    pub dry_run: bool,
    pub label_pattern: String,
    pub fallback_pattern: String,
}

impl SortConfig {
    /// Pages read per document; never below one.
    pub fn page_limit(&self) -> usize {
        self.max_pages.max(1)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            destination_dir: PathBuf::from(DEFAULT_DESTINATION_DIR),
            recursive: false,
            mode: PlaceMode::Move,
            max_pages: DEFAULT_MAX_PAGES,
            dry_run: false,
            label_pattern: DEFAULT_LABEL_PATTERN.to_string(),
            fallback_pattern: DEFAULT_FALLBACK_PATTERN.to_string(),
        }
    }
}
