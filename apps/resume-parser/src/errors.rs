use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure modes of the PDF parsing pipeline.
///
/// The heuristic extractor itself never fails; every variant here comes from
/// upload validation, PDF decoding, configuration or the model call.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("No text could be extracted from the PDF")]
    EmptyText,

    #[error("LLM API key is not configured")]
    LlmNotConfigured,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PdfExtraction(_) => "INVALID_PDF",
            AppError::EmptyText => "EMPTY_TEXT",
            AppError::LlmNotConfigured => "LLM_NOT_CONFIGURED",
            AppError::Llm(LlmError::RateLimited { .. })
            | AppError::Llm(LlmError::Api { status: 429, .. }) => "LLM_RATE_LIMITED",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the person who uploaded the file.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::PdfExtraction(_) => {
                "Invalid PDF file format. Please ensure the file is a valid PDF.".to_string()
            }
            AppError::EmptyText => "Could not extract text from PDF. The PDF might be \
                image-based, password-protected, or corrupted."
                .to_string(),
            AppError::LlmNotConfigured => "The language model API key is not configured. \
                Please set ANTHROPIC_API_KEY in your environment variables."
                .to_string(),
            AppError::Llm(LlmError::RateLimited { .. })
            | AppError::Llm(LlmError::Api { status: 429, .. }) => {
                "Language model rate limit exceeded. Please try again later.".to_string()
            }
            AppError::Llm(LlmError::Parse(_)) => {
                "Failed to parse the language model response. Please try again.".to_string()
            }
            AppError::Llm(e) => format!("Failed to parse PDF: {e}"),
            AppError::Io(e) => format!("Could not read the file: {e}"),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// JSON error body, logging the underlying cause for server-side variants.
    pub fn to_body(&self) -> Value {
        match self {
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Io(e) => tracing::error!("I/O error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        })
    }
}
