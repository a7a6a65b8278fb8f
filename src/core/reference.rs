use crate::domain::ports::{DocumentOcr, ObjectStore, ReferenceProvider};
use crate::utils::error::{QaError, Result};
use async_trait::async_trait;

/// No reference text; the prompt is built from the question alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReference;

#[async_trait]
impl ReferenceProvider for NoReference {
    async fn fetch(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// A UTF-8 text object read as-is.
pub struct TextObject<S: ObjectStore> {
    storage: S,
    bucket: String,
    key: String,
}

impl<S: ObjectStore> TextObject<S> {
    pub fn new(storage: S, bucket: String, key: String) -> Self {
        Self {
            storage,
            bucket,
            key,
        }
    }
}

#[async_trait]
impl<S: ObjectStore> ReferenceProvider for TextObject<S> {
    async fn fetch(&self) -> Result<Option<String>> {
        tracing::debug!("Loading reference text s3://{}/{}", self.bucket, self.key);
        let bytes = self.storage.get_object(&self.bucket, &self.key).await?;

        let text = String::from_utf8(bytes).map_err(|e| QaError::ProcessingError {
            message: format!("Reference '{}' is not valid UTF-8: {}", self.key, e),
        })?;

        tracing::debug!("Loaded {} bytes of reference text", text.len());
        Ok(Some(text))
    }
}

/// A scanned document whose text comes from an OCR service.
pub struct OcrDocument<S: ObjectStore, O: DocumentOcr> {
    storage: S,
    ocr: O,
    bucket: String,
    key: String,
}

impl<S: ObjectStore, O: DocumentOcr> OcrDocument<S, O> {
    pub fn new(storage: S, ocr: O, bucket: String, key: String) -> Self {
        Self {
            storage,
            ocr,
            bucket,
            key,
        }
    }
}

#[async_trait]
impl<S: ObjectStore, O: DocumentOcr> ReferenceProvider for OcrDocument<S, O> {
    async fn fetch(&self) -> Result<Option<String>> {
        tracing::debug!("Loading document s3://{}/{}", self.bucket, self.key);
        let bytes = self.storage.get_object(&self.bucket, &self.key).await?;

        let lines = self.ocr.detect_lines(&bytes).await?;
        tracing::debug!("OCR detected {} lines", lines.len());

        Ok(Some(join_lines(&lines)))
    }
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}
