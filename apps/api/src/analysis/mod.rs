// JD text analysis: readability, inclusion checking, SEO keyword extraction.
// All analyzers are pure, deterministic functions over the input text.

pub mod handlers;
pub mod inclusion;
pub mod keywords;
pub mod readability;
pub mod report;
