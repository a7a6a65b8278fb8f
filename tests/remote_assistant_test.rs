use anyhow::Result;
use bedrock_qa::{RemoteAnswer, RemoteAssistant};
use httpmock::prelude::*;

#[tokio::test]
async fn test_remote_answer_from_function_url() -> Result<()> {
    let server = MockServer::start();
    let ask_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/ask")
            .json_body(serde_json::json!({"question": "What is the notice period?"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"answer": "30 days"}"#);
    });

    let assistant = RemoteAssistant::new(&server.url("/ask"));
    let answer = assistant.ask("What is the notice period?").await?;

    ask_mock.assert();
    assert_eq!(answer, RemoteAnswer::Answer("30 days".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_remote_rejection_keeps_error_body() -> Result<()> {
    let server = MockServer::start();
    let ask_mock = server.mock(|when, then| {
        when.method(POST).path("/ask");
        then.status(400).body(
            r#"{"error": "Invalid JSON in request", "details": "Expecting value: line 1 column 1"}"#,
        );
    });

    let assistant = RemoteAssistant::new(&server.url("/ask"));
    let answer = assistant.ask("hello").await?;

    ask_mock.assert();
    match answer {
        RemoteAnswer::Rejected { status, error } => {
            assert_eq!(status, 400);
            assert_eq!(error.error, "Invalid JSON in request");
            assert_eq!(
                error.details.as_deref(),
                Some("Expecting value: line 1 column 1")
            );
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_remote_proxy_response_is_unwrapped() -> Result<()> {
    // Lambda Invoke API 回傳整個代理回應，狀態碼在 body 裡
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/invoke");
        then.status(200).json_body(serde_json::json!({
            "statusCode": 500,
            "body": "{\"error\": \"Storage error: NoSuchKey\"}"
        }));
    });

    let assistant = RemoteAssistant::new(&server.url("/invoke"));
    match assistant.ask("hello").await? {
        RemoteAnswer::Rejected { status, error } => {
            assert_eq!(status, 500);
            assert!(error.error.contains("NoSuchKey"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_remote_plain_text_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/ask");
        then.status(502).body("Bad Gateway");
    });

    let assistant = RemoteAssistant::new(&server.url("/ask"));
    let answer = assistant.ask("hello").await?;
    assert!(matches!(
        answer,
        RemoteAnswer::Rejected { status: 502, ref error } if error.error == "Bad Gateway"
    ));
    Ok(())
}
