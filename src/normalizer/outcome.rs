use crate::domain::Outcome;

/// Map raw result text onto the closed outcome vocabulary.
///
/// The first matching rule wins: `win`, `draw`, `nc` / `no contest`, `loss`.
/// Anything else comes back as `Outcome::Unknown` carrying the capitalized
/// cleaned text so it can be reported instead of guessed.
pub fn normalize_outcome(cleaned: &str) -> Outcome {
    let lower = cleaned.to_lowercase();

    if lower.contains("win") {
        Outcome::Win
    } else if lower.contains("draw") {
        Outcome::Draw
    } else if lower.contains("nc") || lower.contains("no contest") {
        Outcome::NoContest
    } else if lower.contains("loss") {
        Outcome::Loss
    } else {
        Outcome::Unknown(capitalize(&lower))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
