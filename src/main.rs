use anyhow::Context;
use bedrock_qa::adapters::aws::reference_for;
use bedrock_qa::config::cli::{AskArgs, CliConfig, Command, RemoteArgs};
use bedrock_qa::config::lambda::LambdaConfig;
use bedrock_qa::config::toml_config::ProfileFile;
use bedrock_qa::utils::{logger, validation::Validate};
use bedrock_qa::{
    Assistant, AwsClients, LocalStorage, QaError, RemoteAnswer,
    RemoteAssistant, S3Storage,
};
use clap::Parser;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command {
        Command::Ask(args) => ask(args).await,
        Command::Remote(args) => remote(args).await,
    };

    if let Err(e) = &result {
        if let Some(qa_error) = e.downcast_ref::<QaError>() {
            tracing::error!("💡 Suggestion: {}", qa_error.recovery_suggestion());
        }
    }
    result
}

async fn ask(args: AskArgs) -> anyhow::Result<()> {
    args.validate()?;

    // 合併環境變數與 TOML 覆蓋後再驗證
    let config = resolve_config(&args)?;
    let profile = config.profile;
    tracing::info!("✅ Profile '{}' loaded", profile.name);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no service will be called");
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let clients = AwsClients::load(config.region.as_deref()).await;
    let reference = match &args.local_dir {
        Some(dir) => reference_for(&profile.reference, LocalStorage::new(dir), clients.ocr()),
        None => reference_for(
            &profile.reference,
            S3Storage::new(clients.s3.clone()),
            clients.ocr(),
        ),
    };

    let assistant = Assistant::new(profile, reference, clients.generator())?;
    let response = assistant
        .handle(json!({ "question": args.question }))
        .await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.status_code != 200 {
        anyhow::bail!("assistant responded with status {}", response.status_code);
    }
    Ok(())
}

/// Built-in profile with optional environment values, then TOML overrides.
fn resolve_config(args: &AskArgs) -> anyhow::Result<LambdaConfig> {
    let overrides = match &args.profile {
        Some(path) => {
            tracing::info!("📁 Loading profile overrides from: {}", path.display());
            let file = ProfileFile::from_file(path)
                .with_context(|| format!("reading profile file {}", path.display()))?;
            Some(file)
        }
        None => None,
    };

    let config =
        LambdaConfig::with_overrides(args.assistant, |name| std::env::var(name).ok(), overrides)
            .with_context(|| format!("resolving {} configuration", args.assistant))?;
    Ok(config)
}

async fn remote(args: RemoteArgs) -> anyhow::Result<()> {
    args.validate()?;

    let assistant = RemoteAssistant::new(&args.endpoint);
    match assistant.ask(&args.question).await? {
        RemoteAnswer::Answer(answer) => {
            println!("{}", answer);
            Ok(())
        }
        RemoteAnswer::Rejected { status, error } => {
            eprintln!("❌ {} ({})", error.error, status);
            if let Some(details) = error.details {
                eprintln!("   {}", details);
            }
            anyhow::bail!("remote assistant rejected the request with status {}", status)
        }
    }
}
