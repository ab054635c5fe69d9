//! The shared request pipeline and the two AI operations.
//!
//! Every entry point (page form, JSON API, multipart API) funnels through
//! `resume_text_from` and then one of the `Roaster` operations. There is
//! deliberately no second copy of this logic anywhere.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::extract::{self, FileKind, UploadedDocument};
use crate::llm_client::ChatCompletions;
use crate::roast::prompts::{
    build_improvement_prompt, build_roast_prompt, IMPROVE_SYSTEM, ROAST_SYSTEM,
};
use crate::roast::tone::RoastTone;
use crate::sanitize::sanitize;

/// Sampling temperature for improvement suggestions. Lower than roasts: the
/// advice should stay focused rather than creative.
const IMPROVE_TEMPERATURE: f32 = 0.5;

/// Where the resume text comes from: an uploaded document or raw text.
pub enum ResumeSource {
    Document(UploadedDocument),
    Text(String),
}

/// Validates the source and produces sanitized resume text, rejecting bad
/// input before any completion call is made.
pub async fn resume_text_from(config: &Config, source: ResumeSource) -> Result<String, AppError> {
    match source {
        ResumeSource::Document(doc) => {
            if doc.filename.is_empty() {
                return Err(AppError::Validation("No file selected".to_string()));
            }
            if FileKind::from_filename(&doc.filename).is_none() {
                return Err(AppError::Validation(
                    "Unsupported file type. Please upload a .txt, .pdf, or .docx file."
                        .to_string(),
                ));
            }

            let raw = extract::extract_text(doc).await?;
            let text = sanitize(&raw, config.max_resume_chars);
            if text.is_empty() {
                return Err(AppError::Validation(
                    "Could not extract text from the file".to_string(),
                ));
            }
            Ok(text)
        }
        ResumeSource::Text(raw) => {
            let text = sanitize(&raw, config.max_resume_chars);
            if text.is_empty() {
                return Err(AppError::Validation("Resume text is required".to_string()));
            }
            Ok(text)
        }
    }
}

/// The two AI operations, bound to a completion backend and sampling
/// parameters. Cheap to clone; shared across handlers via `AppState`.
#[derive(Clone)]
pub struct Roaster {
    llm: Arc<dyn ChatCompletions>,
    temperature: f32,
    max_tokens: u32,
}

impl Roaster {
    pub fn new(llm: Arc<dyn ChatCompletions>, config: &Config) -> Self {
        Self {
            llm,
            temperature: config.model_temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Generates a roast in the requested tone. Exactly one completion call
    /// per invocation.
    pub async fn roast(&self, resume_text: &str, tone: RoastTone) -> Result<String, AppError> {
        let prompt = build_roast_prompt(resume_text, tone);
        let start = Instant::now();
        let roast = self
            .llm
            .complete(ROAST_SYSTEM, &prompt, self.temperature, self.max_tokens)
            .await?;
        info!(
            tone = tone.as_str(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "roast generated"
        );
        Ok(roast)
    }

    /// Generates improvement suggestions. Tone-independent.
    pub async fn improve(&self, resume_text: &str) -> Result<String, AppError> {
        let prompt = build_improvement_prompt(resume_text);
        let start = Instant::now();
        let suggestions = self
            .llm
            .complete(IMPROVE_SYSTEM, &prompt, IMPROVE_TEMPERATURE, self.max_tokens)
            .await?;
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "improvement suggestions generated"
        );
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn test_config() -> Config {
        Config {
            groq_api_key: "test-key".to_string(),
            groq_model: "llama3-8b-8192".to_string(),
            model_temperature: 0.7,
            max_tokens: 1024,
            max_upload_bytes: 16 * 1024 * 1024,
            max_resume_chars: 50,
            llm_timeout_secs: 5,
            rate_limit_per_minute: 10,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_text_is_sanitized() {
        let config = test_config();
        let text = resume_text_from(
            &config,
            ResumeSource::Text("  John   Doe \n Engineer  ".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(text, "John Doe Engineer");
    }

    #[tokio::test]
    async fn test_raw_text_is_truncated_at_the_limit() {
        let config = test_config();
        let text = resume_text_from(&config, ResumeSource::Text("z".repeat(200)))
            .await
            .unwrap();
        assert_eq!(text.chars().count(), 50 + 3);
        assert!(text.ends_with("..."));
    }

    #[tokio::test]
    async fn test_empty_raw_text_is_rejected() {
        let config = test_config();
        let err = resume_text_from(&config, ResumeSource::Text("   \n ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Resume text is required");
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected_before_extraction() {
        let config = test_config();
        let doc = UploadedDocument {
            filename: String::new(),
            bytes: Bytes::from_static(b"content"),
        };
        let err = resume_text_from(&config, ResumeSource::Document(doc))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "No file selected");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected_before_extraction() {
        let config = test_config();
        let doc = UploadedDocument {
            filename: "resume.exe".to_string(),
            bytes: Bytes::from_static(b"MZ"),
        };
        let err = resume_text_from(&config, ResumeSource::Document(doc))
            .await
            .unwrap_err();
        assert!(err
            .public_message()
            .starts_with("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_txt_upload_flows_through_extraction_and_sanitizing() {
        let config = test_config();
        let doc = UploadedDocument {
            filename: "resume.txt".to_string(),
            bytes: Bytes::from_static(b"Jane\n\nDoe"),
        };
        let text = resume_text_from(&config, ResumeSource::Document(doc))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe");
    }
}
