//! Professional summary following a summary-style heading near the top.

use crate::extractor::section::{char_len, is_heading};

const SUMMARY_HEADINGS: &[&str] = &["summary", "objective", "profile", "about"];

/// How many non-empty lines from the top are searched for the heading.
const HEADING_SEARCH_LINES: usize = 20;

/// How many lines after the heading may contribute to the summary.
const SUMMARY_WINDOW: usize = 4;

const MIN_SUMMARY_LINE_LEN: usize = 10;

pub fn extract_professional_summary(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let heading = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .take(HEADING_SEARCH_LINES)
        .find(|(_, line)| is_heading(&line.trim().to_lowercase(), SUMMARY_HEADINGS));

    let Some((index, _)) = heading else {
        return String::new();
    };

    lines
        .iter()
        .skip(index + 1)
        .take(SUMMARY_WINDOW)
        .map(|line| line.trim())
        .filter(|line| char_len(line) > MIN_SUMMARY_LINE_LEN)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_lines_after_heading() {
        let text = "Jane Smith\nProfessional Summary\nBackend engineer with eight years of experience.\nFocused on reliability and developer tooling.\n";
        assert_eq!(
            extract_professional_summary(text),
            "Backend engineer with eight years of experience. Focused on reliability and developer tooling."
        );
    }

    #[test]
    fn test_window_is_four_lines_and_skips_short_ones() {
        let text = "Objective\nFirst useful sentence here\nshort\n\nSecond useful sentence\nFifth line is outside the window";
        assert_eq!(
            extract_professional_summary(text),
            "First useful sentence here Second useful sentence"
        );
    }

    #[test]
    fn test_only_first_heading_counts() {
        // The second heading is just a short line inside the first window.
        let text = "About Me\nI build dependable systems.\nProfile\nStill inside the four line window";
        assert_eq!(
            extract_professional_summary(text),
            "I build dependable systems. Still inside the four line window"
        );
    }

    #[test]
    fn test_heading_must_be_near_the_top() {
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!("line {i}\n"));
        }
        text.push_str("Summary\nA summary that appears far too late\n");
        assert_eq!(extract_professional_summary(&text), "");
    }

    #[test]
    fn test_blank_lines_do_not_count_toward_search_limit() {
        let mut text = String::from("Jane Smith\n");
        for _ in 0..30 {
            text.push('\n');
        }
        text.push_str("Summary\nSeasoned engineer and team lead\n");
        assert_eq!(
            extract_professional_summary(&text),
            "Seasoned engineer and team lead"
        );
    }

    #[test]
    fn test_no_heading_gives_empty_summary() {
        assert_eq!(extract_professional_summary("Jane Smith\nEngineer"), "");
    }
}
