//! Skills section scan. Once entered, the section runs to the end of the text.

use crate::extractor::section::{char_len, is_heading, ScanState};
use crate::models::resume::Skills;

const SECTION_HEADINGS: &[&str] = &["skills", "technical"];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "git",
    "typescript",
    "html",
    "css",
    "mongodb",
    "postgresql",
];

/// Lines this short or shorter are dropped from the soft list.
const MIN_SOFT_SKILL_LEN: usize = 3;

pub fn extract_skills(text: &str) -> Skills {
    let (_, skills) = text.lines().map(str::trim).fold(
        (ScanState::Seeking, Skills::default()),
        |(state, mut skills), line| {
            let lower = line.to_lowercase();
            if is_heading(&lower, SECTION_HEADINGS) {
                return (ScanState::InSection, skills);
            }
            if state == ScanState::InSection && !line.is_empty() {
                if TECHNICAL_KEYWORDS.iter().any(|k| lower.contains(*k)) {
                    skills.push_technical(line);
                } else if char_len(line) > MIN_SOFT_SKILL_LEN {
                    skills.push_soft(line);
                }
            }
            (state, skills)
        },
    );
    skills
}
