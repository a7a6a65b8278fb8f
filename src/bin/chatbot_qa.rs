//! Plain chatbot: the question goes straight to the model.

use bedrock_qa::adapters::lambda::serve;
use bedrock_qa::config::AssistantKind;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    serve(AssistantKind::Chatbot).await
}
