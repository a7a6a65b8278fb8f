use anyhow::Result;
use async_trait::async_trait;
use bedrock_qa::config::toml_config::ProfileFile;
use bedrock_qa::core::reference::TextObject;
use bedrock_qa::core::titan;
use bedrock_qa::core::{GenerationRequest, TextGenerator};
use bedrock_qa::{Assistant, AssistantProfile, LocalStorage, ReferenceSource};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Replays a canned Titan response body, recording the encoded request.
#[derive(Clone)]
struct RecordedTitan {
    response_body: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl RecordedTitan {
    fn new(response_body: serde_json::Value) -> Self {
        Self {
            response_body: response_body.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextGenerator for RecordedTitan {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> bedrock_qa::Result<Option<String>> {
        let encoded = titan::encode_request(request)?;
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::from_slice(&encoded)?);
        titan::decode_response(self.response_body.as_bytes())
    }
}

fn write_policy(dir: &TempDir, bucket: &str, key: &str, content: &str) -> Result<()> {
    let bucket_dir = dir.path().join(bucket);
    std::fs::create_dir_all(&bucket_dir)?;
    std::fs::write(bucket_dir.join(key), content)?;
    Ok(())
}

#[tokio::test]
async fn test_hr_policy_end_to_end_with_local_storage() -> Result<()> {
    let dir = TempDir::new()?;
    write_policy(&dir, "labsaibucketdemo", "HRPOLICY.txt", "Notice period is 30 days.")?;

    let generator = RecordedTitan::new(json!({
        "inputTextTokenCount": 40,
        "results": [{"tokenCount": 2, "outputText": "30 days", "completionReason": "FINISH"}]
    }));
    let profile = AssistantProfile::hr_policy(
        "labsaibucketdemo",
        "HRPOLICY.txt",
        "amazon.titan-text-express-v1",
    );
    let reference = TextObject::new(
        LocalStorage::new(dir.path()),
        "labsaibucketdemo".to_string(),
        "HRPOLICY.txt".to_string(),
    );
    let assistant = Assistant::new(profile, reference, generator.clone())?;

    let response = assistant
        .handle(json!({"body": "{\"question\": \"What is the notice period?\"}"}))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"answer": "30 days"}"#);

    let requests = generator.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0]["inputText"],
        "System: Use the following HR policy to answer the user's question.\nContext: Notice period is 30 days.\n\nHuman: What is the notice period?\nAssistant:"
    );
    assert_eq!(requests[0]["textGenerationConfig"]["maxTokenCount"], 500);
    Ok(())
}

#[tokio::test]
async fn test_missing_reference_file_is_500() -> Result<()> {
    let dir = TempDir::new()?;
    let generator = RecordedTitan::new(json!({"results": [{"outputText": "unused"}]}));
    let profile = AssistantProfile::hr_policy("labsaibucketdemo", "HRPOLICY.txt", "m");
    let reference = TextObject::new(
        LocalStorage::new(dir.path()),
        "labsaibucketdemo".to_string(),
        "HRPOLICY.txt".to_string(),
    );
    let assistant = Assistant::new(profile, reference, generator.clone())?;

    let response = assistant.handle(json!({"question": "Anything?"})).await;

    assert_eq!(response.status_code, 500);
    let body: serde_json::Value = serde_json::from_str(&response.body)?;
    assert!(body["error"].as_str().unwrap_or_default().contains("HRPOLICY.txt"));
    assert!(generator.requests.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_toml_profile_overrides_builtin() -> Result<()> {
    let dir = TempDir::new()?;
    write_policy(&dir, "handbook", "leave.txt", "Annual leave is 25 days.")?;

    let profile_path = dir.path().join("leave.toml");
    std::fs::write(
        &profile_path,
        r#"
[assistant]
name = "leave-policy"
prompt_template = "Policy: {context}\nQ: {question}\nA:"
fallback_answer = "I don't know"

[reference]
type = "text"
bucket = "handbook"
key = "leave.txt"

[generation]
max_token_count = 128
temperature = 0.1
top_p = 0.5
"#,
    )?;

    let profile = ProfileFile::from_file(&profile_path)?
        .apply_to(AssistantProfile::chatbot("amazon.titan-text-express-v1"));
    assert_eq!(profile.name, "leave-policy");

    let (bucket, key) = match &profile.reference {
        ReferenceSource::Text { bucket, key } => (bucket.clone(), key.clone()),
        other => panic!("unexpected reference source: {:?}", other),
    };

    let generator = RecordedTitan::new(json!({"results": []}));
    let reference = TextObject::new(LocalStorage::new(dir.path()), bucket, key);
    let assistant = Assistant::new(profile, reference, generator.clone())?;

    let response = assistant.handle(json!({"question": "How much leave?"})).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"answer": "I don't know"}"#);

    let requests = generator.requests.lock().unwrap();
    assert_eq!(
        requests[0]["inputText"],
        "Policy: Annual leave is 25 days.\nQ: How much leave?\nA:"
    );
    assert_eq!(requests[0]["textGenerationConfig"]["maxTokenCount"], 128);

    // 客戶端錯誤訊息沿用內建的 chatbot 設定
    drop(requests);
    let response = assistant.handle(json!({"body": "not json"})).await;
    assert_eq!(response.status_code, 400);
    let body: serde_json::Value = serde_json::from_str(&response.body)?;
    assert_eq!(body["error"], "Invalid JSON in request");
    Ok(())
}

#[tokio::test]
async fn test_malformed_model_body_is_500() -> Result<()> {
    #[derive(Clone)]
    struct GarbageModel;

    #[async_trait]
    impl TextGenerator for GarbageModel {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> bedrock_qa::Result<Option<String>> {
            titan::decode_response(b"<!DOCTYPE html>")
        }
    }

    let assistant = Assistant::new(
        AssistantProfile::chatbot("amazon.titan-text-express-v1"),
        bedrock_qa::core::reference::NoReference,
        GarbageModel,
    )?;

    let response = assistant.handle(json!({"question": "Hello"})).await;
    assert_eq!(response.status_code, 500);
    assert!(response.body.contains("Malformed model response"));
    Ok(())
}
