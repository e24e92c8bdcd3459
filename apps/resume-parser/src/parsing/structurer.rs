//! Structurer backends: anything that turns plain résumé text into a record.
//!
//! `LlmStructurer` asks the model; `HeuristicStructurer` runs the regex
//! extractor and cannot fail. The pipeline holds an `Arc<dyn ResumeStructurer>`
//! for the primary backend so tests can swap in fakes.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extractor::extract_resume_data;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::resume::{EducationEntry, PersonalInfo, ResumeRecord, Skills, WorkEntry};
use crate::parsing::prompts::{build_parse_prompt, RESUME_PARSE_SYSTEM};

#[async_trait]
pub trait ResumeStructurer: Send + Sync {
    /// Short backend name reported alongside results: "llm" | "heuristic".
    fn backend(&self) -> &'static str;

    async fn structure(&self, text: &str) -> Result<ResumeRecord, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristic backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStructurer;

#[async_trait]
impl ResumeStructurer for HeuristicStructurer {
    fn backend(&self) -> &'static str {
        "heuristic"
    }

    async fn structure(&self, text: &str) -> Result<ResumeRecord, AppError> {
        Ok(extract_resume_data(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LLM backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmStructurer(pub LlmClient);

#[async_trait]
impl ResumeStructurer for LlmStructurer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn structure(&self, text: &str) -> Result<ResumeRecord, AppError> {
        let prompt = build_parse_prompt(text);
        let system = format!("{RESUME_PARSE_SYSTEM} {JSON_ONLY_SYSTEM}");
        let draft: LlmResumeDraft = self.0.call_json(&prompt, &system).await?;
        Ok(draft.into())
    }
}

/// Model output before normalization. Any part may be missing or null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmResumeDraft {
    pub personal_info: Option<PersonalInfo>,
    pub professional_summary: Option<String>,
    pub work_experience: Option<Vec<WorkEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Skills>,
}

impl From<LlmResumeDraft> for ResumeRecord {
    /// Applies the same defaults as the heuristic path.
    fn from(draft: LlmResumeDraft) -> Self {
        ResumeRecord::assemble(
            draft.personal_info.unwrap_or_default(),
            draft.professional_summary.unwrap_or_default(),
            draft.work_experience.unwrap_or_default(),
            draft.education.unwrap_or_default(),
            draft.skills.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_heuristic_backend_never_fails() {
        let record = HeuristicStructurer.structure("").await.unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert_eq!(HeuristicStructurer.backend(), "heuristic");
    }

    #[test]
    fn test_full_draft_converts() {
        let draft: LlmResumeDraft = serde_json::from_str(
            r#"{
                "personalInfo": {"fullName": "Jane Smith", "email": "jane@example.com",
                    "phone": "555-123-4567", "location": "Austin, TX",
                    "linkedIn": "", "portfolio": ""},
                "professionalSummary": "- Backend engineer",
                "workExperience": [{"company": "Acme", "position": "Engineer",
                    "startDate": "2020-01", "endDate": "", "current": true,
                    "description": "- Built things"}],
                "education": [{"institution": "State U", "degree": "BSc",
                    "field": "CS", "graduationDate": "2016-05"}],
                "skills": {"technical": "Rust, SQL", "soft": "Mentoring"}
            }"#,
        )
        .unwrap();
        let record = ResumeRecord::from(draft);
        assert_eq!(record.personal_info.full_name, "Jane Smith");
        assert_eq!(record.work_experience.len(), 1);
        assert!(record.work_experience[0].current);
        assert_eq!(record.education[0].graduation_date, "2016-05");
        assert_eq!(record.skills.technical, "Rust, SQL");
    }

    #[test]
    fn test_sparse_draft_is_backfilled() {
        let draft: LlmResumeDraft = serde_json::from_str(
            r#"{"workExperience": [], "skills": {"technical": "Go"}, "education": null}"#,
        )
        .unwrap();
        let record = ResumeRecord::from(draft);
        assert_eq!(record.personal_info, PersonalInfo::default());
        assert_eq!(record.work_experience, vec![WorkEntry::default()]);
        assert_eq!(record.education, vec![EducationEntry::default()]);
        assert_eq!(record.skills.technical, "Go");
        assert_eq!(record.skills.soft, "");
    }

    #[test]
    fn test_null_fields_inside_entries_become_defaults() {
        let draft: LlmResumeDraft = serde_json::from_str(
            r#"{"workExperience": [{"company": "Acme", "endDate": null, "current": null}]}"#,
        )
        .unwrap();
        let record = ResumeRecord::from(draft);
        assert_eq!(record.work_experience[0].company, "Acme");
        assert_eq!(record.work_experience[0].end_date, "");
        assert!(!record.work_experience[0].current);
    }
}
