//! Bundles the three JD text analyzers into one report, the same shape the
//! JD generation flow attaches to every generated variation.

use serde::{Deserialize, Serialize};

use crate::analysis::inclusion::check_di;
use crate::analysis::keywords::extract_seo_keywords;
use crate::analysis::readability::flesch_reading_ease;

/// Analysis of one job description text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdAnalysis {
    pub readability_score: i32,
    pub di_issues: Vec<String>,
    pub seo_keywords: Vec<String>,
}

/// Runs readability, inclusion, and keyword analysis over a JD text.
pub fn analyze_jd(text: &str, key_skills: &[String]) -> JdAnalysis {
    JdAnalysis {
        readability_score: flesch_reading_ease(text),
        di_issues: check_di(text),
        seo_keywords: extract_seo_keywords(text, key_skills),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_bundles_all_three_signals() {
        let jd = "We need a rockstar engineer. You will deploy on AWS with Docker.";
        let analysis = analyze_jd(jd, &["Rust".to_string()]);

        assert_eq!(analysis.di_issues, vec!["Avoid using \"rockstar\""]);
        assert_eq!(analysis.seo_keywords, vec!["Rust", "AWS", "Docker"]);
        // Two short sentences of mostly short words: readable text.
        assert!(
            analysis.readability_score > 50,
            "Got {}",
            analysis.readability_score
        );
    }

    #[test]
    fn test_analysis_of_empty_text() {
        let analysis = analyze_jd("", &[]);
        assert_eq!(analysis.readability_score, 0);
        assert!(analysis.di_issues.is_empty());
        assert!(analysis.seo_keywords.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let jd = "Agile FinTech Startup. Remote work on Kubernetes.";
        assert_eq!(analyze_jd(jd, &[]), analyze_jd(jd, &[]));
    }
}
