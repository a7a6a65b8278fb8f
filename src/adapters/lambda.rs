use crate::adapters::aws::{reference_for, AwsClients};
use crate::adapters::s3::S3Storage;
use crate::config::lambda::LambdaConfig;
use crate::config::AssistantKind;
use crate::core::assistant::Assistant;
use crate::domain::model::HandlerResponse;
use crate::utils::logger;
use crate::utils::validation::Validate;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

/// Cold start for one deployment unit, then serve invocations until shutdown.
pub async fn serve(kind: AssistantKind) -> Result<(), Error> {
    logger::init_lambda_logger();
    tracing::info!("Starting {} Lambda function", kind);

    let lambda_config = LambdaConfig::from_env(kind).map_err(|e| {
        tracing::error!("❌ Configuration error: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;
    lambda_config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // 建立 AWS 客戶端 (跨呼叫共用)
    let clients = AwsClients::load(lambda_config.region.as_deref()).await;
    let reference = reference_for(
        &lambda_config.profile.reference,
        S3Storage::new(clients.s3.clone()),
        clients.ocr(),
    );
    let assistant = Assistant::new(lambda_config.profile, reference, clients.generator())
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let assistant = &assistant;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        let response: HandlerResponse = assistant.handle(event.payload).await;
        tracing::info!(
            "[{}] Responded with status {}",
            assistant.profile().name,
            response.status_code
        );
        Ok::<HandlerResponse, Error>(response)
    }))
    .await
}
