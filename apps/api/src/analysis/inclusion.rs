//! Inclusion Checker — flags non-inclusive language in job description text.

/// Terms to avoid in job postings. Gender-specific words, ableist language,
/// and "unicorn hire" cliches. Matching is case-insensitive substring
/// containment; issue order follows this list.
const NON_INCLUSIVE_TERMS: &[&str] = &[
    "guys",
    "manpower",
    "he/she",
    "chairman",
    "crazy",
    "ninja",
    "rockstar",
];

/// Scans text for non-inclusive terms and returns one issue message per
/// matched term. Empty text produces no issues.
pub fn check_di(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    NON_INCLUSIVE_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| format!("Avoid using \"{term}\""))
        .collect()
}
