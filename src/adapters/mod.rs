// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod http;
pub mod local;

#[cfg(feature = "aws")]
pub mod aws;
#[cfg(feature = "aws")]
pub mod bedrock;
#[cfg(feature = "lambda")]
pub mod lambda;
#[cfg(feature = "aws")]
pub mod s3;
#[cfg(feature = "aws")]
pub mod textract;
