use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page context is missing '{field}' required by {action}")]
    MissingContextError { action: String, field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Configuration,
    Input,
    System,
}

/// 錯誤嚴重程度，CLI 依此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::ApiError(_) => ErrorCategory::Network,
            ClientError::HttpStatusError { .. } => ErrorCategory::Server,
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingContextError { .. } => ErrorCategory::Configuration,
            ClientError::ValidationError { .. } | ClientError::SerializationError(_) => {
                ErrorCategory::Input
            }
            ClientError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可直接重新送出
            ClientError::ApiError(_) | ClientError::HttpStatusError { .. } => ErrorSeverity::Medium,
            ClientError::ValidationError { .. } | ClientError::SerializationError(_) => {
                ErrorSeverity::High
            }
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingContextError { .. } => ErrorSeverity::High,
            ClientError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 顯示在狀態區的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError(e) if e.is_timeout() => {
                "The server took too long to respond".to_string()
            }
            ClientError::ApiError(e) if e.is_connect() => {
                "Couldn't reach the server".to_string()
            }
            ClientError::ApiError(_) => "The request could not be completed".to_string(),
            // 伺服器回傳的內容原樣顯示，4xx 與 5xx 不做區分
            ClientError::HttpStatusError { body, .. } => body.trim_end().to_string(),
            ClientError::MissingContextError { action, field } => {
                format!("{} needs a {} to run", action, field.replace('_', " "))
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and the server URL, then submit again",
            ErrorCategory::Server => "Fix the highlighted problem and submit again",
            ErrorCategory::Configuration => {
                "Check the config file and command line flags (--base-url, --group, --transaction)"
            }
            ErrorCategory::Input => "Check the values you entered",
            ErrorCategory::System => "Check file permissions for the session file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
