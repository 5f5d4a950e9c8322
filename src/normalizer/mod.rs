mod method;
mod outcome;

use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::{Method, Outcome};

pub use method::normalize_method;
pub use outcome::normalize_outcome;

/// Cleans raw result and method text and maps it onto the closed vocabulary
pub struct ContestNormalizer {
    separator_regex: Regex,
    finish_regex: Regex,
}

impl ContestNormalizer {
    pub fn new() -> Result<Self> {
        let separator_regex =
            Regex::new(r"[\s\p{Cc}]+").context("Failed to compile separator regex")?;
        let finish_regex = method::compile_finish_regex()?;

        Ok(Self {
            separator_regex,
            finish_regex,
        })
    }

    /// Collapse newlines, control characters and whitespace runs into single spaces
    pub fn clean(&self, raw: &str) -> String {
        self.separator_regex
            .replace_all(raw, " ")
            .trim()
            .to_string()
    }

    pub fn outcome(&self, raw_result: &str) -> Outcome {
        normalize_outcome(&self.clean(raw_result))
    }

    pub fn method(&self, raw_method: &str) -> Method {
        normalize_method(&self.finish_regex, &self.clean(raw_method))
    }

    pub fn normalize(&self, raw_result: &str, raw_method: &str) -> (Outcome, Method) {
        (self.outcome(raw_result), self.method(raw_method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_embedded_newlines() {
        let normalizer = ContestNormalizer::new().unwrap();
        assert_eq!(normalizer.clean("\n\n  win \n"), "win");
        assert_eq!(normalizer.clean("SUB\n\n\tRear Naked Choke"), "SUB Rear Naked Choke");
        assert_eq!(normalizer.clean("no\u{7}contest"), "no contest");
    }

    #[test]
    fn test_normalize_scraped_cells() {
        let normalizer = ContestNormalizer::new().unwrap();

        assert_eq!(
            normalizer.normalize("\nwin\n", "KO/TKO\n\n Punches"),
            (Outcome::Win, Method::Finish)
        );
        assert_eq!(
            normalizer.normalize(" NC ", "CNC"),
            (Outcome::NoContest, Method::Decision)
        );
        assert_eq!(
            normalizer.normalize("No Contest", "Overturned"),
            (Outcome::NoContest, Method::Decision)
        );
        assert_eq!(
            normalizer.normalize("draw", "S-DEC"),
            (Outcome::Draw, Method::Decision)
        );
    }

    #[test]
    fn test_unrecognized_result_is_not_guessed() {
        let normalizer = ContestNormalizer::new().unwrap();
        assert_eq!(
            normalizer.outcome("  PENDING\n"),
            Outcome::Unknown("Pending".to_string())
        );
    }
}
