//! Resume Q&A: OCR over a PDF in S3, answered by a Titan model.

use bedrock_qa::adapters::lambda::serve;
use bedrock_qa::config::AssistantKind;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    serve(AssistantKind::InterviewAssistant).await
}
