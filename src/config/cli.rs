use crate::config::profile::AssistantKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bedrock-qa")]
#[command(about = "Ask the document question-answering assistants from the command line")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run an assistant locally against AWS
    Ask(AskArgs),
    /// Ask a deployed assistant over HTTP
    Remote(RemoteArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct AskArgs {
    #[arg(long, value_enum, default_value = "chatbot")]
    pub assistant: AssistantKind,

    #[arg(long)]
    pub question: String,

    /// TOML file overriding the built-in profile
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Read reference objects from <dir>/<bucket>/<key> instead of S3
    #[arg(long)]
    pub local_dir: Option<PathBuf>,

    /// Show the resolved profile without calling any service
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RemoteArgs {
    #[arg(long)]
    pub endpoint: String,

    #[arg(long)]
    pub question: String,
}

impl Validate for AskArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("question", &self.question)
    }
}

impl Validate for RemoteArgs {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("question", &self.question)
    }
}
