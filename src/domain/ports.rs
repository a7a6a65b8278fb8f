use crate::domain::model::GenerationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ObjectStore: Send + Sync {
    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

#[async_trait]
pub trait DocumentOcr: Send + Sync {
    /// Returns the detected text lines in reading order.
    async fn detect_lines(&self, document: &[u8]) -> Result<Vec<String>>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// `Ok(None)` means the model answered but produced nothing usable.
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>>;
}

#[async_trait]
pub trait ReferenceProvider: Send + Sync {
    async fn fetch(&self) -> Result<Option<String>>;
}

#[async_trait]
impl<T: ReferenceProvider + ?Sized> ReferenceProvider for Box<T> {
    async fn fetch(&self) -> Result<Option<String>> {
        (**self).fetch().await
    }
}
