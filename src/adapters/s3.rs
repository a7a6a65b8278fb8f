use crate::domain::ports::ObjectStore;
use crate::utils::error::{QaError, Result};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client as S3Client;

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: S3Client,
}

impl S3Storage {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

impl ObjectStore for S3Storage {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let message = match e.as_service_error() {
                    Some(GetObjectError::NoSuchKey(_)) => {
                        format!("NoSuchKey: s3://{}/{} does not exist", bucket, key)
                    }
                    Some(err) if err.code().is_some() => format!(
                        "{} reading s3://{}/{}: {}",
                        err.code().unwrap_or_default(),
                        bucket,
                        key,
                        err.message().unwrap_or_default()
                    ),
                    _ => format!(
                        "Failed to read s3://{}/{}: {}",
                        bucket,
                        key,
                        DisplayErrorContext(&e)
                    ),
                };
                QaError::StorageError { message }
            })?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| QaError::StorageError {
                message: format!("Failed to collect S3 data: {}", e),
            })?;

        Ok(data.into_bytes().to_vec())
    }
}
