pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{RemoteAnswer, RemoteAssistant};
pub use adapters::local::LocalStorage;
pub use config::{AssistantKind, AssistantProfile, ReferenceSource};
pub use core::assistant::Assistant;
pub use domain::model::{GenerationConfig, HandlerResponse};
pub use utils::error::{QaError, Result};

#[cfg(feature = "aws")]
pub use adapters::aws::AwsClients;
#[cfg(feature = "aws")]
pub use adapters::s3::S3Storage;
