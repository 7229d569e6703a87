use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInputValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing input for {field}")]
    MissingInput { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::InvalidInputValue { .. } | AdvisorError::MissingInput { .. } => {
                ErrorCategory::Input
            }
            AdvisorError::TomlParseError(_) | AdvisorError::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            AdvisorError::IoError(_)
            | AdvisorError::CsvError(_)
            | AdvisorError::SerializationError(_) => ErrorCategory::Export,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdvisorError::InvalidInputValue { .. } | AdvisorError::MissingInput { .. } => {
                ErrorSeverity::High
            }
            AdvisorError::TomlParseError(_) | AdvisorError::ConfigError { .. } => {
                ErrorSeverity::High
            }
            AdvisorError::CsvError(_) | AdvisorError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            AdvisorError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AdvisorError::InvalidInputValue { field, .. } => {
                format!("Check the value given for {} and keep it inside its documented range", field)
            }
            AdvisorError::MissingInput { field } => {
                format!("Provide interest, grade and career_fit for {}", field)
            }
            AdvisorError::TomlParseError(_) => {
                "Make sure the file is valid TOML with [fields.ai], [fields.si] and [fields.jaringan] tables".to_string()
            }
            AdvisorError::ConfigError { .. } => "Review the configuration values".to_string(),
            AdvisorError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            AdvisorError::CsvError(_) | AdvisorError::SerializationError(_) => {
                "Retry the export; if it keeps failing, report the inputs that triggered it".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid student input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Export => format!("Could not write the results: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
