use thiserror::Error;

/// Coarse classification of a [`FetchError`], stable across variant changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NetworkError,
    Timeout,
    UnexpectedStatus,
    DecodeError,
    InvalidInput,
    Configuration,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Could not decode countries response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::NetworkError,
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::UnexpectedStatus { .. } => FetchErrorKind::UnexpectedStatus,
            FetchError::Decode(_) => FetchErrorKind::DecodeError,
            FetchError::InvalidInput { .. } => FetchErrorKind::InvalidInput,
            FetchError::ConfigError { .. }
            | FetchError::InvalidConfigValueError { .. }
            | FetchError::Io(_)
            | FetchError::Toml(_) => FetchErrorKind::Configuration,
        }
    }

    /// Whether a caller could reasonably try the same request again.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network { .. } | FetchError::Timeout { .. } => true,
            FetchError::UnexpectedStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Maps a transport error, keeping timeouts apart from other failures.
    pub(crate) fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { timeout_ms }
        } else {
            FetchError::Network {
                message: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
