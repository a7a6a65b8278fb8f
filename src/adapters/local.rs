use crate::domain::ports::ObjectStore;
use crate::utils::error::{QaError, Result};
use std::path::{Component, Path, PathBuf};

/// Object store over a local directory laid out as `<base>/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        let relative = Path::new(bucket).join(key);
        // 不允許 .. 或絕對路徑跳出基底目錄
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(QaError::StorageError {
                message: format!("Invalid object path: {}/{}", bucket, key),
            });
        }
        Ok(self.base_path.join(relative))
    }
}

impl ObjectStore for LocalStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let full_path = self.object_path(bucket, key)?;
        tokio::fs::read(&full_path)
            .await
            .map_err(|e| QaError::StorageError {
                message: format!("Failed to read {}: {}", full_path.display(), e),
            })
    }
}
