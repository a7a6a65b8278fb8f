use crate::config::ErrorMessages;
use crate::utils::error::{QaError, Result};
use serde_json::Value;

/// Pulls the question out of an invocation event.
///
/// API Gateway / function URL events carry the payload as a JSON string under
/// `body`; direct invocations pass the payload itself. A `body` that is not a
/// string is ignored and the event is treated as the payload.
pub fn parse_question(event: &Value, messages: &ErrorMessages) -> Result<String> {
    let parsed;
    let payload = match event.get("body") {
        Some(Value::String(raw)) => {
            parsed = serde_json::from_str::<Value>(raw).map_err(|e| QaError::InvalidRequest {
                message: messages.invalid_body.clone(),
                details: Some(e.to_string()),
            })?;
            &parsed
        }
        _ => event,
    };

    let object = payload.as_object().ok_or_else(|| QaError::InvalidRequest {
        message: messages.invalid_body.clone(),
        details: Some("request payload must be a JSON object".to_string()),
    })?;

    match object.get("question") {
        Some(Value::String(question)) if !question.is_empty() => Ok(question.clone()),
        _ => Err(QaError::MissingQuestion {
            message: messages.missing_question.clone(),
        }),
    }
}
