use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaptorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ScraperError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Input stream closed")]
    InputClosed,
}

impl RaptorError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RaptorError::ConfigError { .. }
                | RaptorError::ConfigValidationError { .. }
                | RaptorError::InvalidConfigValueError { .. }
        )
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RaptorError::ApiError(_) | RaptorError::ScraperError { .. } => {
                format!("The job search service could not be reached: {}", self)
            }
            RaptorError::CsvError(_) | RaptorError::IoError(_) => {
                format!("Writing the output file failed: {}", self)
            }
            RaptorError::InputClosed => "Input ended before the session finished".to_string(),
            _ if self.is_config_error() => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RaptorError::ApiError(_) | RaptorError::ScraperError { .. } => {
                "Check that the scraper endpoint is running and reachable"
            }
            RaptorError::CsvError(_) | RaptorError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            RaptorError::SerializationError(_) => {
                "The scraper returned data in an unexpected format"
            }
            RaptorError::InvalidInput { .. } => "Enter a whole number greater than zero",
            RaptorError::InputClosed => "Run jobraptor from an interactive terminal",
            RaptorError::ProcessingError { .. } => "Please report this as a bug",
            _ => "Review the configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, RaptorError>;
