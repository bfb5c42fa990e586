pub mod context;
pub mod progress;
pub mod runner;

pub use context::DocumentContext;
pub use progress::{ConsoleReporter, NoopProgress, ProgressReporter};
pub use runner::Pipeline;
