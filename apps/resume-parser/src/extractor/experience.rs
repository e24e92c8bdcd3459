//! Work-experience section scan.
//!
//! Lines are folded through [`ExperienceScan`]: a heading switches the scan
//! into the section, an "education" heading ends it, and every line in
//! between is classified once and applied to the pending entry.

use std::ops::ControlFlow;

use crate::extractor::patterns::{DATE_RANGE, ENTRY_HEADER};
use crate::extractor::section::{char_len, is_heading, ScanState};
use crate::models::resume::WorkEntry;

const SECTION_HEADINGS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
    "career",
];

const END_HEADINGS: &[&str] = &["education"];

/// Shorter lines are treated as noise rather than description text.
const MIN_DESCRIPTION_LEN: usize = 20;

/// What a single line inside the section means. Variants are listed in
/// priority order: the first rule that applies wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClassification<'a> {
    NewEntryHeader { position: &'a str, company: &'a str },
    DateRange { start: &'a str, end: &'a str },
    DescriptionLine,
    Ignored,
}

/// Classifies a trimmed, non-empty line.
///
/// A line made up of nothing but a date range ("2020 - Present") would also
/// split as `position - company`; it is read as dates instead. Date ranges and
/// description lines only apply when an entry is pending.
pub fn classify_line(line: &str, has_pending: bool) -> LineClassification<'_> {
    let date = DATE_RANGE.captures(line);
    let whole_line_date = date
        .as_ref()
        .and_then(|caps| caps.get(0))
        .is_some_and(|m| m.start() == 0 && m.end() == line.len());

    if !whole_line_date {
        if let Some(caps) = ENTRY_HEADER.captures(line) {
            if let (Some(position), Some(company)) = (caps.get(1), caps.get(2)) {
                return LineClassification::NewEntryHeader {
                    position: position.as_str().trim(),
                    company: company.as_str().trim(),
                };
            }
        }
    }

    if !has_pending {
        return LineClassification::Ignored;
    }

    if let Some(caps) = date {
        if let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) {
            return LineClassification::DateRange {
                start: start.as_str(),
                end: end.as_str(),
            };
        }
    }

    if char_len(line) > MIN_DESCRIPTION_LEN {
        LineClassification::DescriptionLine
    } else {
        LineClassification::Ignored
    }
}

#[derive(Debug, Default)]
pub struct ExperienceScan {
    state: ScanState,
    pending: Option<WorkEntry>,
    entries: Vec<WorkEntry>,
}

impl ExperienceScan {
    /// Feeds one trimmed line. Breaks when the section has ended.
    pub fn step(&mut self, line: &str) -> ControlFlow<()> {
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

        match classify_line(line, self.pending.is_some()) {
            LineClassification::NewEntryHeader { position, company } => {
                self.flush();
                self.pending = Some(WorkEntry {
                    position: position.to_string(),
                    company: company.to_string(),
                    ..WorkEntry::default()
                });
            }
            LineClassification::DateRange { start, end } => {
                if let Some(entry) = self.pending.as_mut() {
                    entry.start_date = start.to_string();
                    if is_open_ended(end) {
                        entry.current = true;
                    } else {
                        entry.end_date = end.to_string();
                    }
                }
            }
            LineClassification::DescriptionLine => {
                if let Some(entry) = self.pending.as_mut() {
                    entry.push_description(line);
                }
            }
            LineClassification::Ignored => {}
        }

        ControlFlow::Continue(())
    }

    fn flush(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.entries.push(entry);
        }
    }

    pub fn finish(mut self) -> Vec<WorkEntry> {
        self.flush();
        self.entries
    }
}

fn is_open_ended(end: &str) -> bool {
    end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("current")
}

/// Work entries in document order; empty when no experience section is found.
pub fn extract_work_experience(text: &str) -> Vec<WorkEntry> {
    let mut scan = ExperienceScan::default();
    let _ = text.lines().map(str::trim).try_for_each(|line| scan.step(line));
    scan.finish()
}
