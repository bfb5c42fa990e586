pub mod filesystem;
pub mod outcome;

pub use filesystem::{place, FileStorage};
pub use outcome::{Outcome, PlaceMode, DRY_RUN_PREFIX, ERROR_PREFIX};
