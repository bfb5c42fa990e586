use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YearSortError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Environment(#[from] EnvironmentError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    RunLog(#[from] RunLogError),
}

impl YearSortError {
    /// Process exit code for a fatal error. Configuration problems exit with
    /// 2, everything else (missing PDF backend, unwritable destination or
    /// log) with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            YearSortError::Config(_) => 2,
            YearSortError::Environment(_)
            | YearSortError::Storage(_)
            | YearSortError::RunLog(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid regular expression for {name}: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),
}

#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("PDF support is not available in this build (enable the `pdf` feature)")]
    PdfBackendUnavailable,
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process PDF: {0}")]
    PdfProcessing(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move file from '{from}' to '{to}': {source}")]
    MoveFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy file from '{from}' to '{to}': {source}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {0}")]
    FileExists(PathBuf),
}

#[derive(Error, Debug)]
pub enum RunLogError {
    #[error("Failed to create log file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write log row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush log file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YearSortError>;
