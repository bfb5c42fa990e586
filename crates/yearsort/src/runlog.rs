//! Per-run record keeping: one [`ProcessingRecord`] per PDF, the derived
//! [`RunTally`], and the timestamped CSV written at the end of a run.

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::classifier::NO_YEAR_FOLDER;
use crate::error::RunLogError;
use crate::storage::Outcome;

/// Log files are named `log_organizacao_<YYYYMMDD_HHMMSS>.csv`.
pub const LOG_FILE_PREFIX: &str = "log_organizacao_";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRecord {
    pub source_path: PathBuf,
    /// A 4-digit year or [`NO_YEAR_FOLDER`].
    pub year_or_sentinel: String,
    pub outcome: Outcome,
}

impl ProcessingRecord {
    pub fn has_year(&self) -> bool {
        self.year_or_sentinel != NO_YEAR_FOLDER
    }
}

/// One CSV row.
#[derive(Serialize)]
struct LogRow<'a> {
    arquivo_origem: String,
    ano: &'a str,
    destino_ou_motivo: String,
}

impl<'a> From<&'a ProcessingRecord> for LogRow<'a> {
    fn from(record: &'a ProcessingRecord) -> Self {
        Self {
            arquivo_origem: record.source_path.display().to_string(),
            ano: &record.year_or_sentinel,
            destino_ou_motivo: record.outcome.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub total: usize,
    pub with_year: usize,
    pub without_year: usize,
    pub errors: usize,
}

#[derive(Debug, Default)]
pub struct RunLog {
    records: Vec<ProcessingRecord>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source_path: PathBuf, year_or_sentinel: String, outcome: Outcome) {
        self.push(ProcessingRecord {
            source_path,
            year_or_sentinel,
            outcome,
        });
    }

    pub fn push(&mut self, record: ProcessingRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ProcessingRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Failed records count only as errors, whatever their year.
    pub fn tally(&self) -> RunTally {
        self.records
            .iter()
            .fold(RunTally::default(), |mut tally, record| {
                tally.total += 1;
                if record.outcome.is_error() {
                    tally.errors += 1;
                } else if record.has_year() {
                    tally.with_year += 1;
                } else {
                    tally.without_year += 1;
                }
                tally
            })
    }

    /// Writes all records to a timestamped CSV in `output_dir`.
    ///
    /// Returns `Ok(None)` without touching the disk when nothing was recorded.
    pub fn flush(&self, output_dir: &Path) -> Result<Option<PathBuf>, RunLogError> {
        if self.records.is_empty() {
            return Ok(None);
        }

        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let (path, file) = create_log_file(output_dir, &stamp)?;

        let mut writer = csv::Writer::from_writer(file);
        for record in &self.records {
            writer.serialize(LogRow::from(record))?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), rows = self.records.len(), "run log written");
        Ok(Some(path))
    }
}

/// Creates the log file exclusively, adding ` (N)` when a log with the same
/// timestamp already exists.
fn create_log_file(output_dir: &Path, stamp: &str) -> Result<(PathBuf, std::fs::File), RunLogError> {
    let mut counter = 0u32;
    loop {
        let name = if counter == 0 {
            format!("{}{}.csv", LOG_FILE_PREFIX, stamp)
        } else {
            format!("{}{} ({}).csv", LOG_FILE_PREFIX, stamp, counter)
        };
        let path = output_dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(RunLogError::Create { path, source: e }),
        }
    }
}

/// Human-readable end-of-run summary.
pub struct Summary<'a> {
    pub tally: RunTally,
    pub log_path: Option<&'a Path>,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resumo:")?;
        writeln!(f, "  PDFs processados: {}", self.tally.total)?;
        writeln!(f, "  Com ano detectado: {}", self.tally.with_year)?;
        writeln!(f, "  Sem ano detectado: {}", self.tally.without_year)?;
        write!(f, "  Com erro:          {}", self.tally.errors)?;
        if let Some(path) = self.log_path {
            write!(f, "\n  Log salvo em:      {}", path.display())?;
        }
        Ok(())
    }
}
