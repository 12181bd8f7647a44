use thiserror::Error;

/// Message shown to the user whenever the model cannot produce a bedtime.
pub const BEDTIME_FAILURE_MESSAGE: &str =
    "Sorry, there was a problem calculating your bedtime. You must stay up forever.";

#[derive(Error, Debug)]
pub enum BedtimeError {
    #[error("Failed to load model '{source_name}': {message}")]
    ModelLoadError { source_name: String, message: String },

    #[error("Model invocation failed: {message}")]
    ModelInvocationFailure { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Model,
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BedtimeError {
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::ModelInvocationFailure {
            message: message.into(),
        }
    }

    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInputError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelLoadError { .. } | Self::ModelInvocationFailure { .. } => {
                ErrorCategory::Model
            }
            Self::IoError(_) => ErrorCategory::Io,
            Self::TomlError(_) | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidInputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Model => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Text safe to put in front of an end user. Model problems never leak
    /// their underlying cause.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ModelLoadError { .. } | Self::ModelInvocationFailure { .. } => {
                BEDTIME_FAILURE_MESSAGE.to_string()
            }
            Self::InvalidInputError { field, reason, .. } => {
                format!("The {} you entered is not valid: {}", field, reason)
            }
            Self::IoError(_) => "A file could not be read.".to_string(),
            Self::TomlError(_) | Self::ConfigError { .. } => {
                format!("The configuration could not be used: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ModelLoadError { .. } => {
                "Check that the model file exists and lists finite coefficients"
            }
            Self::ModelInvocationFailure { .. } => "Adjust your inputs and try again",
            Self::IoError(_) => "Check the file path and its permissions",
            Self::TomlError(_) => "Make sure the file is valid TOML",
            Self::ConfigError { .. } => "Review the configuration file",
            Self::InvalidInputError { .. } => {
                "Wake time is HH:MM, sleep is 4-12 hours in quarter-hour steps, coffee is 1-15 cups"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BedtimeError>;
