//! Shared test utilities for yearsort integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated runs with temp source/destination directories
//! - Builders for real PDFs (via lopdf) and a scripted text extractor

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
