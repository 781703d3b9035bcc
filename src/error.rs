//! Error types for the wordsyn library.
//!
//! All failures are represented by the [`WordsynError`] enum. Validation
//! failures carry the per-field errors so a caller can show them next to
//! the inputs; server failures carry the message the service returned.
//!
//! # Examples
//!
//! ```
//! use wordsyn::error::{Result, WordsynError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsynError::config("WORDSYN_BASE_URI is not set"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::schema::ValidationErrors;

/// The main error type for wordsyn operations.
#[derive(Error, Debug)]
pub enum WordsynError {
    /// I/O errors (terminal output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failures (connection refused, DNS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed URLs
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Client-side validation rejected the form
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// The service answered with a non-success status.
    ///
    /// `message` is the `error` field of the response body when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Another request is already in flight
    #[error("A request is already in progress")]
    Busy,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias for operations that may fail with WordsynError.
pub type Result<T> = std::result::Result<T, WordsynError>;

impl WordsynError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordsynError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        WordsynError::InvalidOperation(msg.into())
    }

    /// Create a new API error.
    pub fn api<S: Into<String>>(status: u16, msg: S) -> Self {
        WordsynError::Api {
            status,
            message: msg.into(),
        }
    }

    /// HTTP status of the failed response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            WordsynError::Api { status, .. } => Some(*status),
            WordsynError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for WordsynError {
    fn from(errors: ValidationErrors) -> Self {
        WordsynError::Validation(errors)
    }
}
