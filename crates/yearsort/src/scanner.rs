use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::ConfigError;

/// Case-insensitive `.pdf` suffix check on the file name.
pub fn is_pdf(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

pub struct DirectoryScanner {
    input_directory: PathBuf,
    recursive: bool,
    excluded: Option<PathBuf>,
}

impl DirectoryScanner {
    pub fn new<P: AsRef<Path>>(input_directory: P, recursive: bool) -> Self {
        Self {
            input_directory: input_directory.as_ref().to_path_buf(),
            recursive,
            excluded: None,
        }
    }

    /// Never descend into `directory`. Used to keep the destination tree out
    /// of recursive scans when it sits inside the source tree.
    pub fn excluding<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.excluded = directory.as_ref().canonicalize().ok();
        self
    }

    pub fn ensure_exists(&self) -> Result<(), ConfigError> {
        if self.input_directory.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::SourceNotFound(self.input_directory.clone()))
        }
    }

    /// Lazily walks the input directory and yields PDF files.
    ///
    /// Without `recursive` only direct children are listed. Unreadable
    /// entries are skipped with a warning.
    pub fn scan(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.input_directory)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.path().is_file() && is_pdf(entry.path()))
            .map(|entry| {
                debug!("Found document: {}", entry.path().display());
                entry.into_path()
            })
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let Some(excluded) = &self.excluded else {
            return false;
        };

        entry.file_type().is_dir()
            && entry
                .path()
                .canonicalize()
                .map(|p| &p == excluded)
                .unwrap_or(false)
    }
}
