use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("A movie with id {id} already exists")]
    DuplicateId { id: i64 },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidRecord {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn invalid_record(field: &str, value: impl ToString, reason: &str) -> Self {
        CatalogError::InvalidRecord {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        CatalogError::InvalidCommand {
            message: message.into(),
        }
    }

    /// Errors caused by what the user typed. The shell reports these and keeps going.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateId { .. }
                | CatalogError::InvalidRecord { .. }
                | CatalogError::InvalidCommand { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::DuplicateId { .. } => "A movie with this ID already exists.".to_string(),
            CatalogError::InvalidRecord { field, reason, .. } => {
                format!("The {} is not valid: {}", field, reason)
            }
            CatalogError::InvalidCommand { message } => message.clone(),
            CatalogError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration value '{}' is not valid: {}", field, message)
            }
            CatalogError::IoError(e) => format!("Could not read or write: {}", e),
            CatalogError::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::DuplicateId { .. } => "Pick an ID that is not in the list yet",
            CatalogError::InvalidRecord { .. } => {
                "Titles must not be empty and ratings must be between 1 and 5"
            }
            CatalogError::InvalidCommand { .. } => "Type 'help' to see the available commands",
            CatalogError::ConfigError { .. } | CatalogError::ConfigValidationError { .. } => {
                "Check the configuration file path and its TOML syntax"
            }
            CatalogError::IoError(_) => "Check that stdin and stdout are still open",
            CatalogError::SerializationError(_) => "Switch to the text display format",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
