use crate::core::titan;
use crate::domain::model::GenerationRequest;
use crate::domain::ports::TextGenerator;
use crate::utils::error::{QaError, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client as BedrockClient;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Titan text models through Bedrock Runtime `InvokeModel`.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: BedrockClient,
}

impl BedrockGenerator {
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>> {
        let body = titan::encode_request(request)?;

        let resp = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .body(Blob::new(body))
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| QaError::ModelError {
                message: format!(
                    "InvokeModel failed for {}: {}",
                    request.model_id,
                    DisplayErrorContext(&e)
                ),
            })?;

        let body = resp.body.into_inner();
        titan::decode_response(&body)
    }
}
