//! Résumé parsing pipeline: PDF bytes → text → structured record.
//!
//! The model backend is tried first when configured. Whenever it is missing
//! or fails and some text was recovered, the heuristic extractor fills in.

pub mod prompts;
pub mod structurer;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::extractor::extract_resume_data;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRecord;
use crate::pdf;

pub use structurer::{HeuristicStructurer, LlmStructurer, ResumeStructurer};

/// A parsed record plus the backend that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub source: &'static str,
    pub record: ResumeRecord,
}

impl ParseOutcome {
    fn heuristic(text: &str) -> Self {
        Self {
            source: HeuristicStructurer.backend(),
            record: extract_resume_data(text),
        }
    }
}

#[derive(Clone)]
pub struct ResumeParser {
    primary: Option<Arc<dyn ResumeStructurer>>,
    max_upload_bytes: usize,
}

impl ResumeParser {
    pub fn new(primary: Option<Arc<dyn ResumeStructurer>>, max_upload_bytes: usize) -> Self {
        Self {
            primary,
            max_upload_bytes,
        }
    }

    /// Uses the model when an API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let primary: Option<Arc<dyn ResumeStructurer>> = match &config.anthropic_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone(), config.llm_model.clone())?;
                info!("LLM structurer enabled (model: {})", client.model());
                Some(Arc::new(LlmStructurer(client)))
            }
            None => {
                info!("ANTHROPIC_API_KEY not set; using heuristic extraction only");
                None
            }
        };
        Ok(Self::new(primary, config.max_upload_bytes))
    }

    pub fn heuristic_only(max_upload_bytes: usize) -> Self {
        Self::new(None, max_upload_bytes)
    }

    /// Validates and parses an uploaded PDF.
    ///
    /// A PDF that cannot be decoded is treated as having no text, so the
    /// caller gets the same error as for an image-only document.
    pub async fn parse_pdf(&self, bytes: &[u8]) -> Result<ParseOutcome, AppError> {
        pdf::validate_upload(bytes, self.max_upload_bytes)?;

        let text = match pdf::extract_text(bytes.to_vec()).await {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed, continuing without text: {e}");
                String::new()
            }
        };

        self.parse_text(&text).await
    }

    /// Reads a file from disk and parses it, as a PDF or as plain text.
    pub async fn parse_file(&self, path: &Path, plain_text: bool) -> Result<ParseOutcome, AppError> {
        let bytes = tokio::fs::read(path).await?;
        if plain_text {
            self.parse_text(&String::from_utf8_lossy(&bytes)).await
        } else {
            self.parse_pdf(&bytes).await
        }
    }

    /// Structures already-extracted text.
    pub async fn parse_text(&self, text: &str) -> Result<ParseOutcome, AppError> {
        let Some(primary) = &self.primary else {
            if text.is_empty() {
                return Err(AppError::LlmNotConfigured);
            }
            return Ok(ParseOutcome::heuristic(text));
        };

        if text.trim().is_empty() {
            return Err(AppError::EmptyText);
        }

        match primary.structure(text).await {
            Ok(record) => Ok(ParseOutcome {
                source: primary.backend(),
                record,
            }),
            Err(e) => {
                warn!(
                    backend = primary.backend(),
                    "structuring failed, falling back to heuristic extraction: {e}"
                );
                Ok(ParseOutcome::heuristic(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::resume::PersonalInfo;

    const LIMIT: usize = 1024 * 1024;
    const TEXT: &str = "Jane Smith\njane@example.com\nExperience\nEngineer | Acme\n2019 - 2022";

    struct FixedStructurer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResumeStructurer for FixedStructurer {
        fn backend(&self) -> &'static str {
            "llm"
        }

        async fn structure(&self, _text: &str) -> Result<ResumeRecord, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ResumeRecord {
                personal_info: PersonalInfo {
                    full_name: "From Model".to_string(),
                    ..PersonalInfo::default()
                },
                ..ResumeRecord::default()
            })
        }
    }

    struct FailingStructurer;

    #[async_trait]
    impl ResumeStructurer for FailingStructurer {
        fn backend(&self) -> &'static str {
            "llm"
        }

        async fn structure(&self, _text: &str) -> Result<ResumeRecord, AppError> {
            Err(AppError::Llm(LlmError::RateLimited { retries: 3 }))
        }
    }

    fn with_primary(primary: impl ResumeStructurer + 'static) -> ResumeParser {
        ResumeParser::new(Some(Arc::new(primary)), LIMIT)
    }

    #[tokio::test]
    async fn test_without_model_uses_heuristic() {
        let outcome = ResumeParser::heuristic_only(LIMIT)
            .parse_text(TEXT)
            .await
            .unwrap();
        assert_eq!(outcome.source, "heuristic");
        assert_eq!(outcome.record.personal_info.full_name, "Jane Smith");
        assert_eq!(outcome.record.work_experience[0].company, "Acme");
        assert_eq!(outcome.record.work_experience[0].end_date, "2022");
    }

    #[tokio::test]
    async fn test_without_model_and_without_text_fails() {
        let err = ResumeParser::heuristic_only(LIMIT)
            .parse_text("")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LlmNotConfigured));
    }

    #[tokio::test]
    async fn test_model_result_is_used_when_it_succeeds() {
        let parser = with_primary(FixedStructurer {
            calls: AtomicUsize::new(0),
        });
        let outcome = parser.parse_text(TEXT).await.unwrap();
        assert_eq!(outcome.source, "llm");
        assert_eq!(outcome.record.personal_info.full_name, "From Model");
    }

    #[tokio::test]
    async fn test_model_is_not_called_for_blank_text() {
        let primary = Arc::new(FixedStructurer {
            calls: AtomicUsize::new(0),
        });
        let parser = ResumeParser::new(Some(primary.clone() as Arc<dyn ResumeStructurer>), LIMIT);
        let err = parser.parse_text("  \n ").await.unwrap_err();
        assert!(matches!(err, AppError::EmptyText));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_heuristic() {
        let outcome = with_primary(FailingStructurer).parse_text(TEXT).await.unwrap();
        assert_eq!(outcome.source, "heuristic");
        assert_eq!(outcome.record, extract_resume_data(TEXT));
    }

    #[tokio::test]
    async fn test_invalid_upload_is_rejected_before_extraction() {
        let err = with_primary(FailingStructurer)
            .parse_pdf(b"hello")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_undecodable_pdf_is_treated_as_empty_text() {
        let bytes = b"%PDF-1.4 not actually a pdf body";

        let err = with_primary(FailingStructurer)
            .parse_pdf(bytes)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyText));

        let err = ResumeParser::heuristic_only(LIMIT)
            .parse_pdf(bytes)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LlmNotConfigured));
    }

    #[tokio::test]
    async fn test_parse_file_reads_plain_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, TEXT.as_bytes()).unwrap();

        let outcome = ResumeParser::heuristic_only(LIMIT)
            .parse_file(file.path(), true)
            .await
            .unwrap();
        assert_eq!(outcome.record, extract_resume_data(TEXT));
    }

    #[tokio::test]
    async fn test_parse_file_validates_pdf_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, TEXT.as_bytes()).unwrap();

        let err = ResumeParser::heuristic_only(LIMIT)
            .parse_file(file.path(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_parse_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResumeParser::heuristic_only(LIMIT)
            .parse_file(&dir.path().join("missing.pdf"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_from_config_without_key_has_no_primary() {
        let config = Config::from_lookup(|_| None).unwrap();
        let parser = ResumeParser::from_config(&config).unwrap();
        assert!(parser.primary.is_none());
        assert_eq!(parser.max_upload_bytes, crate::config::DEFAULT_MAX_UPLOAD_BYTES);
    }
}
