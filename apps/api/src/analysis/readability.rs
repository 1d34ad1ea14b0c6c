//! Readability Analyzer — Flesch Reading Ease over raw text.
//!
//! Score interpretation: 90-100 very easy (5th grade), 60-70 standard
//! (8th-9th grade), 0-30 very difficult (college graduate). The syllable
//! counter is an estimate (vowel-group counting), which is what the Flesch
//! formula expects from automated tooling.

use once_cell::sync::Lazy;
use regex::Regex;

/// 1-2 consecutive vowels (y included) form one syllable group.
static VOWEL_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Estimates syllables in a single word. Words of 3 characters or fewer
/// count as one syllable; otherwise each vowel group counts as one, with a
/// floor of one.
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let groups = VOWEL_GROUP.find_iter(&word).count();
    groups.max(1)
}

/// Computes the Flesch Reading Ease score, rounded to the nearest integer.
///
/// Formula: 206.835 - 1.015 * ASL - 84.6 * ASW, where ASL is words per
/// sentence and ASW is syllables per word. Text with no sentence terminator
/// or no words has no defined score; this returns 0 for such input instead
/// of dividing by zero.
pub fn flesch_reading_ease(text: &str) -> i32 {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let asl = words.len() as f64 / sentences as f64;
    let asw = syllables as f64 / words.len() as f64;

    (206.835 - 1.015 * asl - 84.6 * asw).round() as i32
}
