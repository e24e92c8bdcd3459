//! Contact fields: name, email, phone, location, LinkedIn and portfolio.
//!
//! Each function scans the whole text on its own and returns the first hit,
//! or an empty string when nothing matches.

use regex::Regex;

use crate::extractor::patterns::{EMAIL, LINKEDIN, LOCATIONS, PHONE, URL};
use crate::models::resume::PersonalInfo;

/// Only the top of the document is searched for a name.
const NAME_SEARCH_LINES: usize = 5;

/// Hosts that show up in URLs but never identify a personal site.
const EXCLUDED_URL_FRAGMENTS: &[&str] =
    &["linkedin.com", "@", "gmail.com", "yahoo.com", "outlook.com"];

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        full_name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        location: extract_location(text),
        linked_in: extract_linkedin(text),
        portfolio: extract_portfolio(text),
    }
}

pub fn extract_email(text: &str) -> String {
    first_match(&EMAIL, text)
}

/// Returned exactly as written; no normalization.
pub fn extract_phone(text: &str) -> String {
    first_match(&PHONE, text)
}

pub fn extract_linkedin(text: &str) -> String {
    first_match(&LINKEDIN, text)
}

/// First URL-looking token that is not LinkedIn, an email, or a webmail host.
pub fn extract_portfolio(text: &str) -> String {
    URL.find_iter(text)
        .map(|m| m.as_str())
        .find(|url| !EXCLUDED_URL_FRAGMENTS.iter().any(|f| url.contains(*f)))
        .map(String::from)
        .unwrap_or_default()
}

/// Guesses the candidate's name from the first few non-empty lines.
///
/// Lines that look like contact details or a document title are skipped; the
/// first remaining line of 2 to 4 words wins.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SEARCH_LINES)
        .filter(|line| !is_contact_or_title(line))
        .find(|line| (2..=4).contains(&line.split_whitespace().count()))
        .map(String::from)
        .unwrap_or_default()
}

fn is_contact_or_title(line: &str) -> bool {
    let lower = line.to_lowercase();
    line.contains('@')
        || PHONE.is_match(line)
        || line.starts_with("http")
        || lower.contains("resume")
        || lower.contains("cv")
}

/// Tries "City, ST" before "City, Country"; the first pattern with any match wins.
pub fn extract_location(text: &str) -> String {
    LOCATIONS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
