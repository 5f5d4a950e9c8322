use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::Method;

const FINISH_PATTERN: &str = r"(?i)\b(?:KO|TKO|SUB|SUBMISSION)\b";

pub fn compile_finish_regex() -> Result<Regex> {
    Regex::new(FINISH_PATTERN).context("Failed to compile finish-method regex")
}

/// Knockout, technical knockout and submission tokens mark a finish;
/// decisions, disqualifications and everything else do not.
pub fn normalize_method(finish_regex: &Regex, cleaned: &str) -> Method {
    if finish_regex.is_match(cleaned) {
        Method::Finish
    } else {
        Method::Decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(text: &str) -> Method {
        let regex = compile_finish_regex().unwrap();
        normalize_method(&regex, text)
    }

    #[test]
    fn test_finish_tokens() {
        assert_eq!(method("KO/TKO"), Method::Finish);
        assert_eq!(method("KO/TKO Punches"), Method::Finish);
        assert_eq!(method("TKO - Doctor's Stoppage"), Method::Finish);
        assert_eq!(method("SUB"), Method::Finish);
        assert_eq!(method("SUB Rear Naked Choke"), Method::Finish);
        assert_eq!(method("Submission"), Method::Finish);
    }

    #[test]
    fn test_non_finishes() {
        assert_eq!(method("U-DEC"), Method::Decision);
        assert_eq!(method("S-DEC"), Method::Decision);
        assert_eq!(method("DQ"), Method::Decision);
        assert_eq!(method("Overturned"), Method::Decision);
        assert_eq!(method("Kimura"), Method::Decision);
        assert_eq!(method(""), Method::Decision);
    }
}
