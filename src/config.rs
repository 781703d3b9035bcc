//! Client configuration.
//!
//! The only setting is the base URL of the words service, read from
//! `WORDSYN_BASE_URI` or passed explicitly.

use std::env;

use log::{debug, warn};
use url::Url;

use crate::error::{Result, WordsynError};

/// Environment variable holding the service base URL.
pub const BASE_URI_ENV: &str = "WORDSYN_BASE_URI";

/// Where the words service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_uri: Url,
}

impl ClientConfig {
    /// Parse a base URL. Only absolute `http`/`https` URLs are accepted.
    pub fn new(base_uri: &str) -> Result<Self> {
        let url = Url::parse(base_uri.trim())?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(WordsynError::config(format!(
                    "unsupported scheme '{other}' in base URI {base_uri}"
                )));
            }
        }
        if url.cannot_be_a_base() {
            return Err(WordsynError::config(format!(
                "base URI {base_uri} cannot carry a path"
            )));
        }

        Ok(ClientConfig { base_uri: url })
    }

    /// Load the base URL from `WORDSYN_BASE_URI`.
    pub fn from_env() -> Result<Self> {
        let value = env::var(BASE_URI_ENV).map_err(|_| {
            warn!("Environment variable {BASE_URI_ENV} not found");
            WordsynError::config(format!("{BASE_URI_ENV} is not set"))
        })?;
        debug!("{BASE_URI_ENV}={value}");
        Self::new(&value)
    }

    /// Get the base URL.
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_uri.clone();
        url.path_segments_mut()
            .map_err(|_| WordsynError::config("base URI cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
