use crate::config::AssistantProfile;
use crate::core::event::parse_question;
use crate::core::json_body::to_body_string;
use crate::core::prompt::PromptTemplate;
use crate::domain::model::{AnswerBody, ErrorBody, GenerationRequest, HandlerResponse};
use crate::domain::ports::{ReferenceProvider, TextGenerator};
use crate::utils::error::{QaError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// One question-answering handler: reference text + prompt + model call.
pub struct Assistant<R: ReferenceProvider, G: TextGenerator> {
    profile: AssistantProfile,
    template: PromptTemplate,
    reference: R,
    generator: G,
}

impl<R: ReferenceProvider, G: TextGenerator> Assistant<R, G> {
    pub fn new(profile: AssistantProfile, reference: R, generator: G) -> Result<Self> {
        let template = PromptTemplate::new(&profile.prompt_template)?;
        Ok(Self {
            profile,
            template,
            reference,
            generator,
        })
    }

    pub fn profile(&self) -> &AssistantProfile {
        &self.profile
    }

    /// Handles one invocation. Every failure becomes a 400 or 500 response.
    pub async fn handle(&self, event: Value) -> HandlerResponse {
        let outcome = match parse_question(&event, &self.profile.messages) {
            Ok(question) => self.answer(&question).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(answer) => HandlerResponse::answer(&answer),
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!("⚠️ [{}] Rejected request: {}", self.profile.name, e);
                } else {
                    tracing::error!("❌ [{}] Request failed: {}", self.profile.name, e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                }
                HandlerResponse::from_error(&e)
            }
        }
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        tracing::info!("[{}] Answering question", self.profile.name);

        let context = self.reference.fetch().await?;
        let prompt = self.template.render(context.as_deref(), question);

        let request = GenerationRequest {
            model_id: self.profile.model_id.clone(),
            prompt,
            config: self.profile.generation,
        };

        tracing::debug!(
            "Invoking model {} with a {}-byte prompt",
            request.model_id,
            request.prompt.len()
        );

        match self.generator.generate(&request).await? {
            Some(answer) => Ok(answer),
            None => {
                tracing::warn!("Model returned no usable output, using fallback answer");
                Ok(self.profile.fallback_answer.clone())
            }
        }
    }
}

impl HandlerResponse {
    pub fn answer(answer: &str) -> Self {
        let body = AnswerBody {
            answer: answer.to_string(),
        };
        match to_body_string(&body) {
            Ok(body) => {
                let mut headers = BTreeMap::new();
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Self {
                    status_code: 200,
                    headers: Some(headers),
                    body,
                }
            }
            Err(e) => Self::from_error(&e),
        }
    }

    pub fn from_error(error: &QaError) -> Self {
        let body = ErrorBody {
            error: error.to_string(),
            details: error.details().map(str::to_string),
        };
        // 序列化只含字串欄位，失敗時退回純文字
        let body = to_body_string(&body)
            .unwrap_or_else(|_| String::from(r#"{"error": "Internal server error"}"#));

        Self {
            status_code: error.status_code(),
            headers: None,
            body,
        }
    }
}
