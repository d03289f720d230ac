use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpportunityError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("A search is already in progress")]
    Busy,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Storage,
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OpportunityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::HttpClient(_) => {
                ErrorCategory::Network
            }
            Self::Busy => ErrorCategory::Concurrency,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidSelector { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Busy => ErrorSeverity::Low,
            // 網路問題通常可以手動重試
            Self::Transport { .. } | Self::HttpStatus { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidSelector { .. } => ErrorSeverity::High,
            Self::HttpClient(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Transport { url, .. } => {
                format!("Could not reach {}. Check your network connection.", url)
            }
            Self::HttpStatus { url, status } => {
                format!("The listing page {} answered with HTTP {}.", url, status)
            }
            Self::Busy => "A search is already running, wait for it to finish.".to_string(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Setting '{}' is missing from the configuration.", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "Retry the search once the connection is back",
            Self::HttpStatus { status, .. } if *status >= 500 => {
                "The site is having trouble, retry later"
            }
            Self::HttpStatus { .. } => "Check that the configured url still points to the listing page",
            Self::HttpClient(_) => "Check the TLS setup of this machine",
            Self::Busy => "Wait for the running search to complete",
            Self::IoError(_) => "Check permissions on the configuration directory",
            Self::SerializationError(_) => "Fix or delete the configuration file to regenerate defaults",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Edit the configuration file and try again",
            Self::InvalidSelector { .. } => "Fix the selector in the profile section of the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, OpportunityError>;
