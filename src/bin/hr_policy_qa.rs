//! HR policy Q&A over a text file in S3. Requires BUCKET_NAME, FILE_KEY and MODEL_ID.

use bedrock_qa::adapters::lambda::serve;
use bedrock_qa::config::AssistantKind;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    serve(AssistantKind::HrPolicy).await
}
