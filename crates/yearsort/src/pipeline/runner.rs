use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::classifier::YearClassifier;
use crate::config::SortConfig;
use crate::error::{Result, RunLogError};
use crate::processor::{extract_or_empty, TextExtractor};
use crate::runlog::{ProcessingRecord, RunLog};
use crate::scanner::DirectoryScanner;
use crate::storage::{place, FileStorage, Outcome};

use super::context::DocumentContext;
use super::progress::ProgressReporter;

pub struct Pipeline {
    config: SortConfig,
    extractor: Box<dyn TextExtractor>,
    classifier: YearClassifier,
    storage: FileStorage,
}

impl Pipeline {
    /// Compiles the classification patterns; an invalid pattern is a
    /// configuration error.
    pub fn new(config: SortConfig, extractor: Box<dyn TextExtractor>) -> Result<Self> {
        let classifier = YearClassifier::new(&config.label_pattern, &config.fallback_pattern)?;
        let storage = FileStorage::new(&config.destination_dir);

        Ok(Self {
            config,
            extractor,
            classifier,
            storage,
        })
    }

    /// Checks the source root and creates the destination root. The
    /// destination is created in dry-run mode too, since the run log lands
    /// there.
    pub fn prepare(&self) -> Result<()> {
        DirectoryScanner::new(&self.config.source_dir, self.config.recursive).ensure_exists()?;
        self.storage.ensure_directory(self.storage.output_directory())?;
        Ok(())
    }

    /// Processes every PDF under the source root, one at a time.
    pub fn run(&self, progress: &dyn ProgressReporter) -> Result<RunLog> {
        self.prepare()?;

        let scanner = DirectoryScanner::new(&self.config.source_dir, self.config.recursive)
            .excluding(self.storage.output_directory());

        let mut log = RunLog::new();
        for path in scanner.scan() {
            let record = self.process(&path);
            progress.report(&record);
            log.push(record);
        }

        info!(documents = log.records().len(), "run finished");
        Ok(log)
    }

    /// Writes the run log next to the year folders.
    pub fn flush_log(&self, log: &RunLog) -> std::result::Result<Option<PathBuf>, RunLogError> {
        log.flush(self.storage.output_directory())
    }

    /// Runs a single document through extraction, classification,
    /// resolution and placement. Always yields exactly one record.
    pub fn process(&self, source: &Path) -> ProcessingRecord {
        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _pipeline_span = info_span!("pipeline", filename = %filename).entered();

        let mut ctx = DocumentContext::new(source.to_path_buf());

        // Step 1: Extract text
        {
            let _step = info_span!("extract_text").entered();
            self.step_extract(&mut ctx);
        }

        // Step 2: Classify
        {
            let _step = info_span!("classify").entered();
            self.step_classify(&mut ctx);
        }

        // Step 3: Resolve destination
        {
            let _step = info_span!("resolve_destination").entered();
            if let Err(outcome) = self.step_resolve(&mut ctx) {
                return ctx.into_record(outcome);
            }
        }

        // Step 4: Place
        let outcome = {
            let _step = info_span!("place").entered();
            self.step_place(&ctx)
        };

        ctx.into_record(outcome)
    }

    fn step_extract(&self, ctx: &mut DocumentContext) {
        ctx.text = extract_or_empty(
            self.extractor.as_ref(),
            &ctx.source_path,
            self.config.page_limit(),
        );
        debug!(chars = ctx.text.len(), "extracted text");
    }

    fn step_classify(&self, ctx: &mut DocumentContext) {
        ctx.year = self.classifier.classify(&ctx.text);
        debug!(year = ctx.folder(), "classified");
    }

    fn step_resolve(&self, ctx: &mut DocumentContext) -> std::result::Result<(), Outcome> {
        let Some(filename) = ctx.source_path.file_name() else {
            return Err(Outcome::Failed(format!(
                "invalid file name: {}",
                ctx.source_path.display()
            )));
        };

        let destination = self
            .storage
            .resolve_destination(ctx.folder(), filename, self.config.dry_run)
            .map_err(|e| Outcome::Failed(e.to_string()))?;

        ctx.destination = Some(destination);
        Ok(())
    }

    fn step_place(&self, ctx: &DocumentContext) -> Outcome {
        let Some(destination) = ctx.destination.as_deref() else {
            return Outcome::Failed("destination was not resolved".to_string());
        };

        let outcome = place(
            &ctx.source_path,
            destination,
            self.config.mode,
            self.config.dry_run,
        );
        debug!(outcome = %outcome, "placed");
        outcome
    }
}
