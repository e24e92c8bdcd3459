//! Section heading heuristic and scan state shared by the section extractors.

/// Lines at least this long are body text, never headings.
pub const MAX_HEADING_LEN: usize = 50;

/// Where a line-by-line section scan currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Seeking,
    InSection,
}

/// A lowercased line is a heading when it is short and names one of `keywords`.
pub fn is_heading(lower: &str, keywords: &[&str]) -> bool {
    char_len(lower) < MAX_HEADING_LEN && keywords.iter().any(|k| lower.contains(*k))
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
