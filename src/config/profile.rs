use crate::domain::model::GenerationConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_s3_bucket_name, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";
pub const DEFAULT_RESUME_BUCKET: &str = "labsaibucketdemo";
pub const DEFAULT_RESUME_KEY: &str = "resumetest.pdf";

pub const INTERVIEW_PROMPT: &str = "System: Use the following resume to answer the question.\n\nResume:\n{context}\n\nHuman: {question}\nAssistant:";
pub const HR_POLICY_PROMPT: &str = "System: Use the following HR policy to answer the user's question.\nContext: {context}\n\nHuman: {question}\nAssistant:";
pub const CHATBOT_PROMPT: &str = "{question}";

const MISSING_QUESTION: &str = "Missing 'question' in request body";
const INVALID_BODY: &str = "Invalid request body";

/// The three deployed question-answering handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum AssistantKind {
    InterviewAssistant,
    Chatbot,
    HrPolicy,
}

impl fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssistantKind::InterviewAssistant => "interview-assistant",
            AssistantKind::Chatbot => "chatbot",
            AssistantKind::HrPolicy => "hr-policy",
        };
        f.write_str(name)
    }
}

/// Where the reference text for the prompt comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReferenceSource {
    None,
    Text { bucket: String, key: String },
    PdfOcr { bucket: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessages {
    pub missing_question: String,
    pub invalid_body: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            missing_question: MISSING_QUESTION.to_string(),
            invalid_body: INVALID_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantProfile {
    pub name: String,
    pub model_id: String,
    pub reference: ReferenceSource,
    pub prompt_template: String,
    pub generation: Option<GenerationConfig>,
    pub fallback_answer: String,
    pub messages: ErrorMessages,
}

impl AssistantProfile {
    /// Resume Q&A: OCR over a PDF in S3, model defaults for sampling.
    pub fn interview_assistant(bucket: &str, key: &str, model_id: &str) -> Self {
        Self {
            name: AssistantKind::InterviewAssistant.to_string(),
            model_id: model_id.to_string(),
            reference: ReferenceSource::PdfOcr {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            prompt_template: INTERVIEW_PROMPT.to_string(),
            generation: None,
            fallback_answer: "No response found.".to_string(),
            messages: ErrorMessages::default(),
        }
    }

    /// Bare chatbot: the question is the whole prompt.
    pub fn chatbot(model_id: &str) -> Self {
        Self {
            name: AssistantKind::Chatbot.to_string(),
            model_id: model_id.to_string(),
            reference: ReferenceSource::None,
            prompt_template: CHATBOT_PROMPT.to_string(),
            generation: Some(GenerationConfig {
                max_token_count: 200,
                temperature: 0.5,
                top_p: 0.9,
            }),
            fallback_answer: "No response".to_string(),
            messages: ErrorMessages {
                missing_question: "Question is required".to_string(),
                invalid_body: "Invalid JSON in request".to_string(),
            },
        }
    }

    /// HR policy Q&A over a plain-text document in S3.
    pub fn hr_policy(bucket: &str, key: &str, model_id: &str) -> Self {
        Self {
            name: AssistantKind::HrPolicy.to_string(),
            model_id: model_id.to_string(),
            reference: ReferenceSource::Text {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            prompt_template: HR_POLICY_PROMPT.to_string(),
            generation: Some(GenerationConfig {
                max_token_count: 500,
                temperature: 0.5,
                top_p: 0.9,
            }),
            fallback_answer: "No response".to_string(),
            messages: ErrorMessages::default(),
        }
    }
}

impl Validate for GenerationConfig {
    fn validate(&self) -> Result<()> {
        validate_range("generation.max_token_count", self.max_token_count, 1, 8192)?;
        validate_range("generation.temperature", self.temperature, 0.0, 1.0)?;
        validate_range("generation.top_p", self.top_p, 0.0, 1.0)?;
        Ok(())
    }
}

impl Validate for AssistantProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model_id", &self.model_id)?;
        validate_non_empty_string("prompt_template", &self.prompt_template)?;

        match &self.reference {
            ReferenceSource::None => {}
            ReferenceSource::Text { bucket, key } | ReferenceSource::PdfOcr { bucket, key } => {
                validate_s3_bucket_name("reference.bucket", bucket)?;
                validate_non_empty_string("reference.key", key)?;
            }
        }

        if let Some(generation) = &self.generation {
            generation.validate()?;
        }

        tracing::debug!("✅ Profile '{}' validation passed", self.name);
        Ok(())
    }
}
