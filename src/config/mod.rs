#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod profile;
pub mod toml_config;

pub use profile::{AssistantKind, AssistantProfile, ErrorMessages, ReferenceSource};
