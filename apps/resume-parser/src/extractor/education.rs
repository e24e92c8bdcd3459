//! Education section scan.

use std::ops::ControlFlow;

use crate::extractor::patterns::{DEGREE, YEAR};
use crate::extractor::section::{is_heading, ScanState};
use crate::models::resume::EducationEntry;

const SECTION_HEADINGS: &[&str] = &["education"];
const END_HEADINGS: &[&str] = &["skills", "technical"];

#[derive(Debug)]
pub struct EducationScan {
    state: ScanState,
    /// Shared by every entry: the last year anywhere in the document.
    graduation_date: String,
    entries: Vec<EducationEntry>,
}

impl EducationScan {
    pub fn new(text: &str) -> Self {
        Self {
            state: ScanState::Seeking,
            graduation_date: last_year(text),
            entries: Vec::new(),
        }
    }

    /// Feeds one trimmed line together with the raw line that follows it.
    pub fn step(&mut self, line: &str, next_line: Option<&str>) -> ControlFlow<()> {
        let lower = line.to_lowercase();

        if is_heading(&lower, SECTION_HEADINGS) {
            self.state = ScanState::InSection;
            return ControlFlow::Continue(());
        }

        if self.state == ScanState::Seeking {
            return ControlFlow::Continue(());
        }

        if is_heading(&lower, END_HEADINGS) {
            return ControlFlow::Break(());
        }

        if line.is_empty() {
            return ControlFlow::Continue(());
        }

        if let Some(caps) = DEGREE.captures(line) {
            self.entries.push(EducationEntry {
                institution: next_line.map(str::trim).unwrap_or_default().to_string(),
                degree: caps
                    .get(0)
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default()
                    .to_string(),
                field: caps
                    .get(2)
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default()
                    .to_string(),
                graduation_date: self.graduation_date.clone(),
            });
        }

        ControlFlow::Continue(())
    }

    pub fn finish(self) -> Vec<EducationEntry> {
        self.entries
    }
}

/// Last 4-digit run in the text, scanning left to right without overlap.
fn last_year(text: &str) -> String {
    YEAR.find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// One entry per degree line, in document order. The institution is taken
/// from the line directly below the degree.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut scan = EducationScan::new(text);
    let _ = lines
        .iter()
        .enumerate()
        .try_for_each(|(i, line)| scan.step(line.trim(), lines.get(i + 1).copied()));
    scan.finish()
}
