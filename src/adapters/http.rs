use crate::domain::model::{AnswerBody, ErrorBody, HandlerResponse};
use crate::utils::error::{QaError, Result};
use reqwest::Client;
use serde_json::json;

/// Outcome of asking a deployed assistant.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteAnswer {
    Answer(String),
    Rejected { status: u16, error: ErrorBody },
}

/// Client for an assistant exposed over HTTP (function URL or API Gateway).
pub struct RemoteAssistant {
    client: Client,
    endpoint: String,
}

impl RemoteAssistant {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub async fn ask(&self, question: &str) -> Result<RemoteAnswer> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "question": question }))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Remote response status: {}", status);
        let text = response.text().await?;

        // 直接呼叫 Lambda Invoke API 時回傳的是整個代理回應
        let body = match serde_json::from_str::<HandlerResponse>(&text) {
            Ok(proxy) => return Self::interpret(proxy.status_code, &proxy.body),
            Err(_) => text,
        };

        Self::interpret(status.as_u16(), &body)
    }

    fn interpret(status: u16, body: &str) -> Result<RemoteAnswer> {
        if (200..300).contains(&status) {
            let answer: AnswerBody =
                serde_json::from_str(body).map_err(|e| QaError::ProcessingError {
                    message: format!("Unexpected answer body ({}): {}", e, body),
                })?;
            return Ok(RemoteAnswer::Answer(answer.answer));
        }

        let error = serde_json::from_str::<ErrorBody>(body).unwrap_or_else(|_| ErrorBody {
            error: body.to_string(),
            details: None,
        });
        Ok(RemoteAnswer::Rejected { status, error })
    }
}
