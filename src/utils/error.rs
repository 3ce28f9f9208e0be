use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Operation '{operation}' not found in profile")]
    MissingOperationError { operation: String },

    #[error(
        "Invalid record #{index} for '{implementation}': size={size}, repetitions={repetitions}"
    )]
    InvalidRecordError {
        implementation: String,
        index: usize,
        size: u64,
        repetitions: u64,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DocsError {
    pub fn parse(message: impl Into<String>) -> Self {
        DocsError::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DocsError::FetchError(_) | DocsError::HttpStatusError { .. } => ErrorCategory::Network,
            DocsError::ParseError { .. }
            | DocsError::MissingOperationError { .. }
            | DocsError::InvalidRecordError { .. }
            | DocsError::SerializationError(_)
            | DocsError::CsvError(_) => ErrorCategory::Data,
            DocsError::ConfigError { .. }
            | DocsError::InvalidConfigValueError { .. }
            | DocsError::MissingConfigError { .. } => ErrorCategory::Config,
            DocsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重跑即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DocsError::FetchError(_) => "Check network connectivity and the --base-url value",
            DocsError::HttpStatusError { .. } => {
                "Verify the site publishes /versions and releases/<version>/profile/profile.json"
            }
            DocsError::ParseError { .. } => {
                "Check that the versions list and profile.json are well formed"
            }
            DocsError::MissingOperationError { .. } => {
                "Pick an operation that exists in the profile (see --operation)"
            }
            DocsError::InvalidRecordError { .. } => {
                "Profile records need non-zero size and repetitions; regenerate the profile"
            }
            DocsError::CsvError(_) | DocsError::SerializationError(_) => {
                "Check the output data for unsupported values"
            }
            DocsError::IoError(_) => "Check file permissions and available disk space",
            DocsError::ConfigError { .. }
            | DocsError::InvalidConfigValueError { .. }
            | DocsError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the documentation site: {}", self),
            ErrorCategory::Data => format!("The site returned unusable data: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;
