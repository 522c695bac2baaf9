use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    #[error("Missing required fields: {message}")]
    MissingFields { message: String },

    #[error("Email generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TrackerError {
    /// Process exit code for the CLI: validation failures map to 2,
    /// generation failures to 1, configuration and IO problems to 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::InvalidDateRange { .. } | TrackerError::MissingFields { .. } => 2,
            TrackerError::GenerationFailed { .. } => 1,
            TrackerError::IoError(_)
            | TrackerError::SerializationError(_)
            | TrackerError::ConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
