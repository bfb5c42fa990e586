//! Test harness for isolated runs.
//!
//! `TestHarness` owns a temp directory with `input/` and `output/` inside,
//! builds pipelines against them and inspects the results.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use yearsort::{NoopProgress, Pipeline, RunLog, SortConfig, TextExtractor};

use super::builders::build_pdf;

pub struct TestHarness {
    temp_dir: TempDir,
    /// Source root scanned by the pipeline.
    pub input_dir: PathBuf,
    /// Destination root; not created up front so tests can observe the
    /// pipeline creating it.
    pub output_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");
        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");

        Self {
            temp_dir,
            input_dir,
            output_dir,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes raw bytes below the input directory, creating parents.
    pub fn write_input(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.input_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create input subdir");
        }
        std::fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// Writes a real PDF with the given page texts.
    pub fn write_pdf(&self, relative: &str, pages: &[&str]) -> PathBuf {
        self.write_input(relative, &build_pdf(pages))
    }

    pub fn config(&self) -> SortConfig {
        SortConfig {
            source_dir: self.input_dir.clone(),
            destination_dir: self.output_dir.clone(),
            ..SortConfig::default()
        }
    }

    pub fn run(&self, config: SortConfig, extractor: Box<dyn TextExtractor>) -> RunLog {
        let pipeline = Pipeline::new(config, extractor).expect("Failed to build pipeline");
        pipeline.run(&NoopProgress).expect("Run failed")
    }

    /// Runs and flushes the log, like the binary does.
    pub fn run_and_flush(
        &self,
        config: SortConfig,
        extractor: Box<dyn TextExtractor>,
    ) -> (RunLog, Option<PathBuf>) {
        let pipeline = Pipeline::new(config, extractor).expect("Failed to build pipeline");
        let log = pipeline.run(&NoopProgress).expect("Run failed");
        let log_path = pipeline.flush_log(&log).expect("Failed to write log");
        (log, log_path)
    }

    pub fn output(&self, relative: &str) -> PathBuf {
        self.output_dir.join(relative)
    }

    /// All files below the output directory, relative and sorted, log
    /// files excluded.
    pub fn output_files(&self) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(&self.output_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(&self.output_dir)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .filter(|p| !p.starts_with(yearsort::runlog::LOG_FILE_PREFIX))
            .collect();
        files.sort();
        files
    }

    /// Log files written into the output directory.
    pub fn log_files(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(&self.output_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().starts_with(yearsort::runlog::LOG_FILE_PREFIX))
                        .unwrap_or(false)
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}
