//! Keyword Extractor — builds the SEO keyword list for a job description.
//!
//! The result is the caller's key skills plus any fixed-vocabulary terms
//! found in the text, deduplicated in first-seen order.

/// Common backend, cloud, and industry terms searched for as literal
/// case-sensitive substrings. Order here is the output order for matches.
const SEO_VOCABULARY: &[&str] = &[
    "Node.js",
    "MongoDB",
    "REST API",
    "AWS",
    "Docker",
    "Kubernetes",
    "Python",
    "Java",
    "Cloud",
    "FinTech",
    "Remote",
    "Startup",
    "Agile",
];

/// Extracts SEO keywords from job description text. Key skills supplied by
/// the caller always appear first; vocabulary matches follow in vocabulary
/// order. Empty text yields an empty list.
pub fn extract_seo_keywords(text: &str, key_skills: &[String]) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut keywords: Vec<String> = Vec::new();
    for skill in key_skills {
        if !keywords.contains(skill) {
            keywords.push(skill.clone());
        }
    }
    for term in SEO_VOCABULARY {
        if text.contains(term) && !keywords.iter().any(|k| k == term) {
            keywords.push((*term).to_string());
        }
    }
    keywords
}
