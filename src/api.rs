//! HTTP client for the words service.
//!
//! Each operation is a single request/response. Nothing is retried or
//! cached, and no timeout is set beyond the HTTP library defaults.
//!
//! # Examples
//!
//! ```no_run
//! use wordsyn::api::{ApiClient, WordApi};
//! use wordsyn::config::ClientConfig;
//!
//! # async fn example() -> wordsyn::error::Result<()> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8080")?);
//! let result = client.fetch_synonyms("cat").await?;
//! println!("{}: {:?}", result.word, result.synonyms);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{Result, WordsynError};
use crate::types::{
    AddSynonymResponse, AddWordResponse, ErrorBody, FormData, GetSynonymsResponse,
    GetWordsForSynonymResponse,
};

/// The four operations the form performs against the service.
#[async_trait]
pub trait WordApi: Send + Sync {
    /// `POST /word` with `{word, synonym}`.
    async fn create_word(&self, data: &FormData) -> Result<AddWordResponse>;

    /// `POST /synonym/{word}` with `{synonym}`. Returns the association id.
    async fn attach_synonym(&self, data: &FormData) -> Result<AddSynonymResponse>;

    /// `GET /synonyms/{word}`.
    async fn fetch_synonyms(&self, word: &str) -> Result<GetSynonymsResponse>;

    /// `GET /words/{synonym}`.
    async fn fetch_words_for_synonym(&self, synonym: &str) -> Result<GetWordsForSynonymResponse>;
}

#[derive(Debug, Serialize)]
struct SynonymRequest<'a> {
    synonym: &'a str,
}

/// reqwest-backed [`WordApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for making requests.
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client with a default HTTP client.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        ApiClient { client, config }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Decode a success body, or turn an error status into [`WordsynError::Api`].
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().clone();
    let text = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text.trim().to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };
        debug!("{url} answered {status}: {message}");
        return Err(WordsynError::api(status.as_u16(), message));
    }

    debug!("{url} answered {status}");
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl WordApi for ApiClient {
    async fn create_word(&self, data: &FormData) -> Result<AddWordResponse> {
        let url = self.config.endpoint(&["word"])?;
        debug!("POST {url}");
        let response = self.client.post(url).json(data).send().await?;
        read_response(response).await
    }

    async fn attach_synonym(&self, data: &FormData) -> Result<AddSynonymResponse> {
        let url = self.config.endpoint(&["synonym", data.word.as_str()])?;
        debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(&SynonymRequest {
                synonym: &data.synonym,
            })
            .send()
            .await?;
        read_response(response).await
    }

    async fn fetch_synonyms(&self, word: &str) -> Result<GetSynonymsResponse> {
        let url = self.config.endpoint(&["synonyms", word])?;
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }

    async fn fetch_words_for_synonym(&self, synonym: &str) -> Result<GetWordsForSynonymResponse> {
        let url = self.config.endpoint(&["words", synonym])?;
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }
}
