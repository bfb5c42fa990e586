//! Sorts PDF documents into per-year folders.
//!
//! Each PDF found under a source directory has the text of its first pages
//! extracted, a reference year located in that text (a labeled
//! "Ano de exercício" first, any bare year otherwise), and is then moved or
//! copied into `<destination>/<year>/`, or `<destination>/SEM_ANO/` when no
//! year turns up. Every decision is recorded in a timestamped CSV log.

pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod processor;
pub mod runlog;
pub mod scanner;
pub mod storage;

pub use classifier::{YearClassifier, NO_YEAR_FOLDER};
pub use config::SortConfig;
pub use error::{
    ConfigError, EnvironmentError, ProcessError, Result, RunLogError, StorageError, YearSortError,
};
pub use pipeline::{ConsoleReporter, NoopProgress, Pipeline, ProgressReporter};
pub use processor::{default_extractor, TextExtractor};
pub use runlog::{ProcessingRecord, RunLog, RunTally, Summary};
pub use scanner::DirectoryScanner;
pub use storage::{FileStorage, Outcome, PlaceMode};
