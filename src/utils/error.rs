use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid {field}: '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown city: '{name}'")]
    UnknownCityError { name: String },

    #[error("Input ended before the booking was complete")]
    InputClosedError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::IoError(_) => ErrorCategory::System,
            BookingError::SerializationError(_) => ErrorCategory::Processing,
            BookingError::ConfigValidationError { .. }
            | BookingError::InvalidConfigValueError { .. }
            | BookingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BookingError::InvalidInputError { .. }
            | BookingError::UnknownCityError { .. }
            | BookingError::InputClosedError => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BookingError::IoError(_) => ErrorSeverity::Critical,
            BookingError::SerializationError(_) => ErrorSeverity::High,
            BookingError::ConfigValidationError { .. }
            | BookingError::InvalidConfigValueError { .. }
            | BookingError::MissingConfigError { .. } => ErrorSeverity::Medium,
            BookingError::InvalidInputError { .. } | BookingError::UnknownCityError { .. } => {
                ErrorSeverity::Low
            }
            BookingError::InputClosedError => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookingError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            BookingError::SerializationError(_) => {
                "Re-run the booking; if it persists, report the ticket data".to_string()
            }
            BookingError::ConfigValidationError { field, .. }
            | BookingError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            BookingError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            BookingError::InvalidInputError { field, .. } => {
                format!("Re-enter a valid {}", field)
            }
            BookingError::UnknownCityError { .. } => {
                "Pick a city from the directory, or extend it with --cities-file".to_string()
            }
            BookingError::InputClosedError => {
                "Run the program in an interactive terminal".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::IoError(e) => format!("A file operation failed: {}", e),
            BookingError::SerializationError(_) => {
                "Could not encode the ticket receipt".to_string()
            }
            BookingError::ConfigValidationError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            BookingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
            BookingError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            BookingError::InvalidInputError { reason, .. } => reason.clone(),
            BookingError::UnknownCityError { name } => {
                format!("Unknown city '{}'. Try again.", name)
            }
            BookingError::InputClosedError => {
                "Input ended before the booking was complete".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
