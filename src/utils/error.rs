use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid {field} '{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unauthenticated: {reason}")]
    UnauthenticatedError { reason: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Auth,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        NumerologyError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        NumerologyError::UnauthenticatedError {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NumerologyError::ValidationError { .. } => ErrorCategory::Input,
            NumerologyError::UnauthenticatedError { .. } => ErrorCategory::Auth,
            NumerologyError::MissingConfigError { .. }
            | NumerologyError::ConfigValidationError { .. }
            | NumerologyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NumerologyError::IoError(_)
            | NumerologyError::CsvError(_)
            | NumerologyError::SerializationError(_)
            | NumerologyError::InternalError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Auth => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NumerologyError::ValidationError { .. } => {
                "Check the input format: 10-digit mobile number, a name with letters, or an alphanumeric vehicle number"
            }
            NumerologyError::UnauthenticatedError { .. } => {
                "Send a valid token in the 'Authorization: Bearer <token>' header"
            }
            NumerologyError::MissingConfigError { .. }
            | NumerologyError::ConfigValidationError { .. }
            | NumerologyError::InvalidConfigValueError { .. } => {
                "Review the configuration file and environment variables"
            }
            NumerologyError::IoError(_) => "Check that the file exists and is readable",
            NumerologyError::CsvError(_) => {
                "Make sure the CSV file has a 'domain,input' header row"
            }
            NumerologyError::SerializationError(_) => "Check the JSON payload format",
            NumerologyError::InternalError { .. } => "Retry the request or check the server logs",
        }
    }

    /// 可直接顯示給終端使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            NumerologyError::ValidationError { field, reason, .. } => {
                format!("Please provide a valid {}: {}", field, reason)
            }
            NumerologyError::UnauthenticatedError { .. } => {
                "Authentication failed, access denied".to_string()
            }
            NumerologyError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            NumerologyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            NumerologyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            _ => "Something went wrong while calculating numerology".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
