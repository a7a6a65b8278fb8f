use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("{message}")]
    InvalidRequest {
        message: String,
        details: Option<String>,
    },

    #[error("{message}")]
    MissingQuestion { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("OCR error: {message}")]
    OcrError { message: String },

    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Remote API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QaError>;

impl QaError {
    /// 請求本身有問題 (400)，其他一律視為伺服器錯誤 (500)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QaError::InvalidRequest { .. } | QaError::MissingQuestion { .. }
        )
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            QaError::InvalidRequest { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QaError::InvalidRequest { .. } | QaError::MissingQuestion { .. } => {
                "Send a JSON object with a non-empty \"question\" string"
            }
            QaError::StorageError { .. } => {
                "Check that the bucket and key exist and the role can read them"
            }
            QaError::OcrError { .. } => "Check that the reference document is a readable PDF",
            QaError::ModelError { .. } => {
                "Check the model id and that model access is enabled in this region"
            }
            QaError::ApiError(_) => "Check the endpoint URL and network connectivity",
            QaError::MissingConfigError { .. } => "Set the missing environment variable",
            QaError::ConfigError { .. } | QaError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
            QaError::ProcessingError { .. }
            | QaError::IoError(_)
            | QaError::SerializationError(_) => "Check the logs for details",
        }
    }
}
