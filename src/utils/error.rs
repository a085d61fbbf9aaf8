use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid date range '{input}': {reason}")]
    InvalidDateRange { input: String, reason: String },

    #[error("Failed to scrape {source_name}: {message}")]
    ScrapeError {
        source_name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Parsing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::HttpError(_) => ErrorCategory::Network,
            PlannerError::UrlError(_)
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlannerError::InvalidDateRange { .. } => ErrorCategory::Input,
            PlannerError::ScrapeError { .. } => ErrorCategory::Parsing,
            PlannerError::CsvError(_)
            | PlannerError::IoError(_)
            | PlannerError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlannerError::ScrapeError { .. } => ErrorSeverity::Low,
            PlannerError::HttpError(_) => ErrorSeverity::Medium,
            PlannerError::UrlError(_)
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::MissingConfigError { .. }
            | PlannerError::InvalidDateRange { .. } => ErrorSeverity::High,
            PlannerError::CsvError(_) | PlannerError::SerializationError(_) => {
                ErrorSeverity::High
            }
            PlannerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection or raise --timeout-seconds, then retry"
            }
            ErrorCategory::Configuration => {
                "Review the command line flags or the TOML configuration file"
            }
            ErrorCategory::Input => {
                "Enter the dates as 'YYYY-MM-DD to YYYY-MM-DD' with the end on or after the start"
            }
            ErrorCategory::Parsing => {
                "The site layout may have changed; try again later or refine your inputs"
            }
            ErrorCategory::Output => "Make sure the output path exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::InvalidDateRange { input, .. } => {
                format!("Could not understand the date range '{}'", input)
            }
            PlannerError::MissingConfigError { field } => {
                format!("Please fill in all fields ({} is missing)", field)
            }
            PlannerError::HttpError(_) => {
                "Oops, something went wrong while contacting a travel site".to_string()
            }
            other => format!("Oops, something went wrong: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
