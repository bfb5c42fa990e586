//! `yearsort` command line entry point.
//!
//! ```bash
//! # Preview what would happen to the PDFs in ./inbox
//! yearsort --src inbox --dst arquivo --dry-run
//!
//! # Copy (instead of move) and look into subdirectories too
//! yearsort --src inbox --recursive --copy
//! ```
//!
//! Exit codes: 0 on completion (per-file errors included), 1 when PDF
//! support is missing or the destination cannot be written, 2 for an
//! invalid pattern or a missing source directory.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use yearsort::processor::default_extractor;
use yearsort::{logging, ConsoleReporter, Pipeline, Summary};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erro: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> yearsort::Result<()> {
    let extractor = default_extractor()?;
    let pipeline = Pipeline::new(cli.into_config(), extractor)?;

    let log = pipeline.run(&ConsoleReporter)?;

    let flushed = pipeline.flush_log(&log);
    let log_path = flushed.as_ref().ok().and_then(|path| path.as_deref());

    println!();
    println!(
        "{}",
        Summary {
            tally: log.tally(),
            log_path,
        }
    );

    flushed?;
    Ok(())
}
