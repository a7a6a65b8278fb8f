pub mod assistant;
pub mod event;
pub mod json_body;
pub mod prompt;
pub mod reference;
pub mod titan;

pub use crate::domain::model::{GenerationConfig, GenerationRequest, HandlerResponse};
pub use crate::domain::ports::{DocumentOcr, ObjectStore, ReferenceProvider, TextGenerator};
pub use crate::utils::error::Result;
