//! External dictionary lookups

use crate::core::Word;
use crate::error::LookupError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Free Dictionary API endpoint; the lowercase word is appended as a path segment
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A dictionary that can tell whether a word exists
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Resolve to `Ok(true)` for a known word and `Ok(false)` for an unknown one
    ///
    /// # Errors
    /// Returns `LookupError` when the dictionary could not be asked. Callers
    /// accept the word in that case.
    async fn check(&self, word: &Word) -> Result<bool, LookupError>;
}

/// Dictionary backed by an HTTP entry endpoint
///
/// A 2xx response means the word exists, a 4xx response means it does not, and
/// anything else is reported as an error.
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDictionary {
    /// # Errors
    /// Returns `LookupError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn url_for(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            word.to_lowercase()
        )
    }
}

#[async_trait]
impl DictionaryLookup for HttpDictionary {
    async fn check(&self, word: &Word) -> Result<bool, LookupError> {
        let response = self.client.get(self.url_for(word)).send().await?;
        let status = response.status();

        if status.is_server_error() {
            return Err(LookupError::Server {
                status: status.as_u16(),
            });
        }

        debug!(word = %word, status = status.as_u16(), "Dictionary lookup answered");
        Ok(status.is_success())
    }
}
