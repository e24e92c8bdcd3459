//! Résumé PDF parser: turns an uploaded résumé into the structured record a
//! résumé builder pre-fills its forms with.

pub mod config;
pub mod errors;
pub mod extractor;
pub mod llm_client;
pub mod models;
pub mod parsing;
pub mod pdf;

pub use errors::AppError;
pub use extractor::extract_resume_data;
pub use models::resume::ResumeRecord;
pub use parsing::{ParseOutcome, ResumeParser};
