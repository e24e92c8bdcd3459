//! Heuristic résumé field extractor.
//!
//! Pure, synchronous text scanning used when no language model is available
//! or the model call fails. Every extractor runs over the same input and
//! returns an empty value instead of failing; the results are merged into a
//! [`ResumeRecord`] whose lists are never empty.

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;
pub mod section;
pub mod skills;
pub mod summary;

use tracing::debug;

use crate::models::resume::ResumeRecord;

pub use contact::{
    extract_email, extract_linkedin, extract_location, extract_name, extract_personal_info,
    extract_phone, extract_portfolio,
};
pub use education::extract_education;
pub use experience::{classify_line, extract_work_experience, LineClassification};
pub use skills::extract_skills;
pub use summary::extract_professional_summary;

/// Extracts a full record from plain résumé text.
pub fn extract_resume_data(text: &str) -> ResumeRecord {
    let personal_info = extract_personal_info(text);
    let professional_summary = extract_professional_summary(text);
    let work_experience = extract_work_experience(text);
    let education = extract_education(text);
    let skills = extract_skills(text);

    debug!(
        chars = text.len(),
        work_entries = work_experience.len(),
        education_entries = education.len(),
        has_email = !personal_info.email.is_empty(),
        "heuristic extraction finished"
    );

    ResumeRecord::assemble(
        personal_info,
        professional_summary,
        work_experience,
        education,
        skills,
    )
}
