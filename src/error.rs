//! Error types for stashpull
//!
//! Every operation of the client reports failures through [`Error`]. A sequence
//! ends with at most one of these, and the same value is replayed to every
//! observer of that sequence, so the enum is `Clone` and keeps its sources
//! behind `Arc`.

use std::sync::Arc;
use thiserror::Error;

/// Boxed, shareable cause of a transport failure
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// The main error type for stashpull
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(Arc<serde_yaml::Error>),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(Arc<serde_json::Error>),

    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Transport failure: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode {target}: {message}")]
    Decode {
        target: &'static str,
        message: String,
    },

    // ============================================================================
    // Sequence Errors
    // ============================================================================
    #[error("Invalid page at start={start}: {message}")]
    InvalidPage { start: u32, message: String },

    #[error("Stopped after {max_pages} pages without reaching the last page")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Sequence did not finish within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Sequence cancelled")]
    Cancelled,

    #[error("Sequence completed without a value")]
    Empty,

    #[error("Sequence producer panicked")]
    Panicked,

    #[error("Sequence producer dropped before finishing")]
    Abandoned,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a network-level failure
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport {
            source: Arc::new(source),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error for the named target type
    pub fn decode(target: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            target,
            message: message.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(start: u32, message: impl Into<String>) -> Self {
        Self::InvalidPage {
            start,
            message: message.into(),
        }
    }

    /// The HTTP status carried by a bad-status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a network-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Check if this error came from a response body that did not match
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::InvalidPage { .. })
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlParse(Arc::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(Arc::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

/// Result type alias for stashpull
pub type Result<T> = std::result::Result<T, Error>;
