use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenesisError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenesisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenesisError::IoError(_) => ErrorCategory::Io,
            GenesisError::SerializationError(_) => ErrorCategory::Serialization,
            GenesisError::MissingConfigError { .. }
            | GenesisError::InvalidConfigValueError { .. }
            | GenesisError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GenesisError::IoError(_) => ErrorSeverity::Critical,
            GenesisError::SerializationError(_) => ErrorSeverity::High,
            GenesisError::MissingConfigError { .. } => ErrorSeverity::High,
            GenesisError::InvalidConfigValueError { .. }
            | GenesisError::ConfigValidationError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GenesisError::IoError(_) => {
                "Check that the config file exists and the output path is writable".to_string()
            }
            GenesisError::SerializationError(_) => {
                "The assembled sections could not be serialized; please report this".to_string()
            }
            GenesisError::MissingConfigError { field } => {
                format!("Add a [{}] table to the genesis config file", field)
            }
            GenesisError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the genesis config file", field)
            }
            GenesisError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' settings in the genesis config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenesisError::IoError(e) => format!("File access failed: {}", e),
            GenesisError::SerializationError(e) => format!("Output serialization failed: {}", e),
            GenesisError::MissingConfigError { field } => {
                format!("The genesis config has no [{}] section", field)
            }
            GenesisError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            GenesisError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenesisError>;
