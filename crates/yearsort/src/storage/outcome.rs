use std::fmt;
use std::path::PathBuf;

/// Prefix that marks a failed outcome in the console and in the run log.
pub const ERROR_PREFIX: &str = "ERRO:";

/// Prefix that marks a dry-run outcome.
pub const DRY_RUN_PREFIX: &str = "DRY-RUN:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceMode {
    Move,
    Copy,
}

impl fmt::Display for PlaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceMode::Move => write!(f, "mover"),
            PlaceMode::Copy => write!(f, "copiar"),
        }
    }
}

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file now lives at this path.
    Placed(PathBuf),
    /// Nothing was touched; `action` would have put the file at `destination`.
    DryRun {
        action: PlaceMode,
        destination: PathBuf,
    },
    /// Placement failed; carries the underlying error text.
    Failed(String),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Placed(path) => write!(f, "{}", path.display()),
            Outcome::DryRun {
                action,
                destination,
            } => write!(
                f,
                "{} {} -> {}",
                DRY_RUN_PREFIX,
                action,
                destination.display()
            ),
            Outcome::Failed(reason) => write!(f, "{} {}", ERROR_PREFIX, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_rendering() {
        let placed = Outcome::Placed(PathBuf::from("/out/2023/a.pdf"));
        assert_eq!(placed.to_string(), "/out/2023/a.pdf");

        let dry = Outcome::DryRun {
            action: PlaceMode::Copy,
            destination: PathBuf::from("/out/SEM_ANO/b.pdf"),
        };
        assert_eq!(dry.to_string(), "DRY-RUN: copiar -> /out/SEM_ANO/b.pdf");

        let failed = Outcome::Failed("Permission denied".to_string());
        assert_eq!(failed.to_string(), "ERRO: Permission denied");
    }

    #[test]
    fn test_only_failures_carry_error_prefix() {
        let dry = Outcome::DryRun {
            action: PlaceMode::Move,
            destination: PathBuf::from("x.pdf"),
        };
        assert!(!dry.to_string().starts_with(ERROR_PREFIX));
        assert!(!dry.is_error());
        assert!(Outcome::Failed("boom".into()).is_error());
        assert!(!Outcome::Placed(PathBuf::from("x.pdf")).is_error());
    }
}
