//! # wordsyn
//!
//! A validating client for a words and synonyms REST service.
//!
//! ## Features
//!
//! - Form validation with normalization and numeric-string rejection
//! - Async HTTP client for the four service endpoints
//! - Form orchestration with a single loading gate and notifications
//! - Text rendering of query results
//! - A `wordsyn` command line front end

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod schema;
pub mod types;

pub mod prelude {
    pub use crate::api::{ApiClient, WordApi};
    pub use crate::config::ClientConfig;
    pub use crate::error::{Result, WordsynError};
    pub use crate::form::{Action, Form, FormState, Notification, Outcome};
    pub use crate::schema::{FormShape, ValidatedForm, ValidationErrors, validate};
    pub use crate::types::FormData;
}
