//! Compiled patterns shared by the field extractors.
//!
//! Every pattern is a literal, so compilation failure is a programming error
//! and `expect` is the right response.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"));

pub static PHONE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"));

pub static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[a-z0-9_-]+"));

pub static URL: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?[a-z0-9-]+\.[a-z]{2,}(?:/\S*)?"));

/// "City, ST" first, then "City, Country".
pub static LOCATIONS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        compile(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s*[A-Z]{2}"),
        compile(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s*[A-Z][a-z]+"),
    ]
});

/// `Position | Company`, also split on hyphen, en dash and em dash.
pub static ENTRY_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"^(.+?)\s*[|\-–—]\s*(.+)$"));

pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)(\d{4}|\w+\s+\d{4})\s*[-–—]\s*(Present|Current|\d{4}|\w+\s+\d{4})")
});

pub static DEGREE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)(Bachelor|Master|PhD|Doctorate|Associate|Diploma|Certificate).*?(?:in|of)\s*(.+?)(?:,|\s+-\s+|\s*$)",
    )
});

pub static YEAR: Lazy<Regex> = Lazy::new(|| compile(r"\d{4}"));
