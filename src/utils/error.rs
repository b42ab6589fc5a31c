use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown geoprocessing tool: {name}")]
    UnknownTool { name: String },

    #[error("Tool '{tool}' has no parameter named '{name}'")]
    UnknownParameter { tool: String, name: String },

    #[error("Tool '{tool}' requires parameter '{name}'")]
    MissingParameter { tool: String, name: String },

    #[error("Parameter '{name}' of '{tool}' is given more than once")]
    DuplicateParameter { tool: String, name: String },

    #[error("Parameter '{name}' of '{tool}' is derived and cannot be set")]
    ReadOnlyParameter { tool: String, name: String },

    #[error("Invalid value '{value}' for '{tool}.{parameter}': {reason}")]
    InvalidValue {
        tool: String,
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Geoprocessing service error {code}: {message}")]
    ServiceError {
        code: i64,
        message: String,
        details: Vec<String>,
    },

    #[error("Job {job_id} finished with status {status}")]
    JobFailed {
        job_id: String,
        status: String,
        messages: Vec<String>,
    },

    #[error("Job {job_id} still running after {attempts} status checks")]
    PollTimeout { job_id: String, attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Request,
    Network,
    Service,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GpError::ConfigError { .. }
            | GpError::ConfigValidationError { .. }
            | GpError::InvalidConfigValueError { .. }
            | GpError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GpError::UnknownTool { .. } => ErrorCategory::Catalog,
            GpError::UnknownParameter { .. }
            | GpError::MissingParameter { .. }
            | GpError::ReadOnlyParameter { .. }
            | GpError::DuplicateParameter { .. }
            | GpError::InvalidValue { .. } => ErrorCategory::Request,
            GpError::HttpError(_) | GpError::PollTimeout { .. } => ErrorCategory::Network,
            GpError::ServiceError { .. } | GpError::JobFailed { .. } => ErrorCategory::Service,
            GpError::CsvError(_) | GpError::IoError(_) | GpError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration
            | ErrorCategory::Catalog
            | ErrorCategory::Request
            | ErrorCategory::Service => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Failures after which submitting again cannot run the tool twice.
    /// A timed-out request may already have reached the server, so only
    /// connect failures count. A poll timeout leaves a live job that must
    /// be cancelled first.
    pub fn is_retryable(&self) -> bool {
        match self {
            GpError::HttpError(e) => e.is_connect(),
            GpError::PollTimeout { .. } => true,
            GpError::JobFailed { status, .. } => status == "esriJobTimedOut",
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GpError::UnknownTool { name } => {
                format!("No tool named '{}' in the catalog", name)
            }
            GpError::MissingParameter { tool, name } => {
                format!("{} needs a value for '{}'", tool, name)
            }
            GpError::InvalidValue {
                parameter, reason, ..
            } => format!("'{}' was rejected: {}", parameter, reason),
            GpError::ServiceError { message, details, .. } if !details.is_empty() => {
                format!("The server rejected the request: {} ({})", message, details.join("; "))
            }
            GpError::ServiceError { message, .. } => {
                format!("The server rejected the request: {}", message)
            }
            GpError::JobFailed {
                status, messages, ..
            } => match messages.last() {
                Some(last) => format!("The job ended with {}: {}", status, last),
                None => format!("The job ended with {}", status),
            },
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and command-line options",
            ErrorCategory::Catalog => "Run `gp-catalog list` to see the available tools",
            ErrorCategory::Request => "Run `gp-catalog describe <tool>` to see its parameters and allowed values",
            ErrorCategory::Network => "Check that the server is reachable, then try again",
            ErrorCategory::Service => "Inspect the job messages on the server for the cause",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, GpError>;
