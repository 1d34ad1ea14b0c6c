//! Field Extractor — pulls raw field values out of plain resume text.
//!
//! Everything here is pattern matching over unstructured text: a handful of
//! independent regex searches, each with a bounded fallback. Resume layouts
//! are not a grammar, so no parser abstraction is warranted. Confidence
//! scoring happens downstream in `confidence.rs`.

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Compiled patterns
// ────────────────────────────────────────────────────────────────────────────

/// A full line that looks like a person's name: 2-3 capitalized words, no digits.
static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(\s[A-Z][a-z]+){1,2}$").unwrap());

/// Fallback: first "First Last" shaped substring anywhere in the text.
static NAME_ANYWHERE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").unwrap());

/// North-American-style numbers: (123) 456-7890, 123-456-7890, +1 123 456 7890, ...
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

static SKILLS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Skills|Technologies|Technical Skills|Competencies|Core Skills)[\s:]*")
        .unwrap()
});

static EXPERIENCE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Experience|Work History|Employment|Work Experience)[\s:]*").unwrap()
});

static PROJECTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Projects|Key Projects|Project Experience)[\s:]*").unwrap());

static EDUCATION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Education|Academic Background|Qualifications)[\s:]*").unwrap());

/// Section boundary: a blank line followed by a heading-like capitalized line,
/// or a newline followed by one of the known section names.
static NEXT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\n\s*\n\s*[A-Z][a-z ]+)|(?:\n\s*(?:Experience|Education|Projects|Skills|Languages|Certifications|Interests))",
    )
    .unwrap()
});

/// Blank-line paragraph break.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Delimiters between skill tokens: comma, pipe, bullet, newline.
static SKILL_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,|•\n]").unwrap());

/// Fallback vocabulary when no skills header is present in the document.
const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Java",
    "C++",
    "SQL",
    "AWS",
    "Docker",
    "Git",
    "TypeScript",
    "HTML",
    "CSS",
    "Agile",
];

const MAX_SKILLS: usize = 15;
const MAX_SECTION_LINES: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Raw extracted field values, before confidence scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub education: Option<String>,
}

/// Runs every field heuristic over the document text.
/// Missing fields come back as `None` / empty, never as an error.
pub fn extract_fields(text: &str) -> RawFields {
    RawFields {
        name: extract_name(text),
        email: find_first(&EMAIL, text),
        phone: find_first(&PHONE, text),
        skills: extract_skills(text),
        experience: extract_section(text, &EXPERIENCE_HEADER),
        projects: extract_section(text, &PROJECTS_HEADER),
        education: extract_section(text, &EDUCATION_HEADER),
    }
}

fn find_first(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Names are usually at the very top of a resume, so check the first five
/// non-empty lines for a strict 2-3 word capitalized line before falling
/// back to the first "First Last" substring anywhere in the document.
fn extract_name(text: &str) -> Option<String> {
    let candidates = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(5);
    for line in candidates {
        if NAME_LINE.is_match(line) {
            return Some(line.to_string());
        }
    }
    find_first(&NAME_ANYWHERE, text)
}

/// Skills come from the block under a skills-like header when one exists,
/// split on commas/pipes/bullets/newlines. Without a header, falls back to
/// scanning for a fixed vocabulary of common skills (case-insensitive).
/// Deduplicated, capped at 15.
fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    if let Some(header) = SKILLS_HEADER.find(text) {
        let rest = &text[header.end()..];
        // Take content up to the next paragraph break only.
        let block = match PARAGRAPH_BREAK.find(rest) {
            Some(brk) => &rest[..brk.start()],
            None => rest,
        };
        for token in SKILL_DELIMITER.split(block) {
            let token = token.trim();
            let len = token.chars().count();
            if len > 2 && len < 30 && !skills.iter().any(|s| s == token) {
                skills.push(token.to_string());
            }
        }
    } else {
        let lower = text.to_lowercase();
        for skill in COMMON_SKILLS {
            if lower.contains(&skill.to_lowercase()) {
                skills.push((*skill).to_string());
            }
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

/// Shared section extraction: locate a header synonym, capture text up to
/// the next section boundary, and keep at most the first 10 non-empty lines.
fn extract_section(text: &str, header: &Regex) -> Option<String> {
    let found = header.find(text)?;
    let rest = &text[found.end()..];
    let content = match NEXT_SECTION.find(rest) {
        Some(boundary) => &rest[..boundary.start()],
        None => rest,
    };

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_SECTION_LINES)
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
