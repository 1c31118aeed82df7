use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{operation} returned HTTP {status}: {body}")]
    HttpStatusError {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Image decoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Remote,
    Image,
    Configuration,
    Io,
}

impl CuratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CuratorError::ApiError(_) => ErrorCategory::Transport,
            CuratorError::HttpStatusError { .. } | CuratorError::SerializationError(_) => {
                ErrorCategory::Remote
            }
            CuratorError::ImageError(_) => ErrorCategory::Image,
            CuratorError::IoError(_) => ErrorCategory::Io,
            CuratorError::ConfigError { .. } | CuratorError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CuratorError::ApiError(_) => "Check network connectivity and the API base URL",
            CuratorError::HttpStatusError { status: 401, .. }
            | CuratorError::HttpStatusError { status: 403, .. } => {
                "Check that ACCESS_TOKEN is set and still valid"
            }
            CuratorError::HttpStatusError { status: 404, .. } => {
                "Check BOARD_ID and the API base URL"
            }
            CuratorError::HttpStatusError { .. } => "The remote API rejected the request; try again later",
            CuratorError::SerializationError(_) => "The API response did not have the expected shape",
            CuratorError::ImageError(_) => "The image could not be decoded",
            CuratorError::IoError(_) => "Check file paths and permissions",
            CuratorError::ConfigError { .. } | CuratorError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CuratorError>;
