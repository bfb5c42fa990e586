use regex::Regex;

use crate::error::ConfigError;

/// Folder that receives documents without a detectable year.
pub const NO_YEAR_FOLDER: &str = "SEM_ANO";

/// Matches the "Ano de exercício" label followed, within 40 non-digit
/// characters, by a 19xx/20xx year. Group 1 is the year.
pub const DEFAULT_LABEL_PATTERN: &str =
    r"(?i)Ano\s*de\s*exerc[ií]cio[^0-9]{0,40}(\b(19|20)\d{2}\b)";

/// Any bare 19xx/20xx year.
pub const DEFAULT_FALLBACK_PATTERN: &str = r"\b(19|20)\d{2}\b";

/// Finds the reference year of a document in its extracted text.
///
/// A labeled year wins over any other 4-digit number in the text. Only the
/// first match of each pattern is considered.
#[derive(Debug, Clone)]
pub struct YearClassifier {
    label: Regex,
    fallback: Regex,
}

impl YearClassifier {
    pub fn new(label_pattern: &str, fallback_pattern: &str) -> Result<Self, ConfigError> {
        let label = compile("--label-pattern", label_pattern)?;
        let fallback = compile("--fallback-year-pattern", fallback_pattern)?;

        // captures_len counts the implicit whole-match group
        if label.captures_len() < 2 {
            return Err(ConfigError::InvalidPattern {
                name: "--label-pattern".to_string(),
                reason: "pattern must contain a capture group for the year".to_string(),
            });
        }

        Ok(Self { label, fallback })
    }

    /// A label match settles the question: if its year group did not take
    /// part in the match there is no year, and the fallback is not tried.
    pub fn classify(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = self.label.captures(text) {
            return caps.get(1).map(|year| year.as_str().to_string());
        }

        self.fallback.find(text).map(|m| m.as_str().to_string())
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
