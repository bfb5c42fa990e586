use crate::runlog::ProcessingRecord;

pub trait ProgressReporter {
    /// Called once per document, right after its record is final.
    fn report(&self, record: &ProcessingRecord);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _record: &ProcessingRecord) {}
}

/// Prints one `[OK]` / `[ERRO]` line per document to stdout.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&self, record: &ProcessingRecord) {
        println!("{}", status_line(record));
    }
}

pub fn status_line(record: &ProcessingRecord) -> String {
    let tag = if record.outcome.is_error() {
        "[ERRO]"
    } else {
        "[OK]  "
    };
    format!(
        "{} {} -> {}",
        tag,
        record.source_path.display(),
        record.outcome
    )
}
