//! Request and response bodies for the Amazon Titan text models on Bedrock.

use crate::domain::model::{GenerationConfig, GenerationRequest};
use crate::utils::error::{QaError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest<'a> {
    input_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_generation_config: Option<TitanGenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanGenerationConfig {
    max_token_count: u32,
    temperature: f32,
    top_p: f32,
}

impl From<GenerationConfig> for TitanGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            max_token_count: config.max_token_count,
            temperature: config.temperature,
            top_p: config.top_p,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResult {
    #[serde(default)]
    output_text: Option<String>,
}

pub fn encode_request(request: &GenerationRequest) -> Result<Vec<u8>> {
    let body = TitanRequest {
        input_text: &request.prompt,
        text_generation_config: request.config.map(TitanGenerationConfig::from),
    };
    Ok(serde_json::to_vec(&body)?)
}

/// First result's `outputText`, or `None` when there is nothing usable.
pub fn decode_response(body: &[u8]) -> Result<Option<String>> {
    let response: TitanResponse =
        serde_json::from_slice(body).map_err(|e| QaError::ModelError {
            message: format!("Malformed model response: {}", e),
        })?;

    let text = response
        .results
        .into_iter()
        .next()
        .and_then(|result| result.output_text)
        .filter(|text| !text.trim().is_empty());

    Ok(text)
}
