// Text normalization helpers shared by the scorers

/// Split text into lowercase tokens on non-alphanumeric boundaries.
/// Empty tokens (punctuation runs, repeated separators) are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Normalize interest terms: trim, case-fold, drop empties, deduplicate
/// while preserving first-occurrence order.
pub fn normalize_terms(terms: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
