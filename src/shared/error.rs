use std::fmt;

use super::validation::ValidationFailureKind;

#[derive(Debug, Clone)]
pub enum AppError {
    Network(String),
    NotFound(String),
    InvalidInput(String),
    ValidationError {
        kind: ValidationFailureKind,
        message: String,
    },
    RateLimited {
        message: String,
        retry_after_seconds: u64,
    },
    Upload(String),
    ConfigurationError(String),
    SerializationError(String),
    DeserializationError(String),
    Internal(String),
}

impl AppError {
    pub fn validation(kind: ValidationFailureKind, message: impl Into<String>) -> Self {
        AppError::ValidationError {
            kind,
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>, retry_after_seconds: u64) -> Self {
        AppError::RateLimited {
            message: message.into(),
            retry_after_seconds,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::RateLimited { .. } => "RATE_LIMITED",
            AppError::Upload(_) => "UPLOAD_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::DeserializationError(_) => "DESERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 画面にそのまま出せる文言。詳細はログ側に残す。
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Could not reach the server. Please check your connection and try again."
                    .to_string()
            }
            AppError::NotFound(_) => "The requested record no longer exists.".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::RateLimited {
                retry_after_seconds,
                ..
            } => format!("Too many requests. Please retry in {retry_after_seconds} seconds."),
            AppError::Upload(_) => "The file could not be uploaded.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::ValidationError { kind, message } => {
                write!(f, "Validation error ({}): {}", kind, message)
            }
            AppError::RateLimited {
                message,
                retry_after_seconds,
            } => write!(
                f,
                "Rate limited: {} (retry after {}s)",
                message, retry_after_seconds
            ),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            AppError::DeserializationError(err.to_string())
        } else {
            AppError::SerializationError(err.to_string())
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
