//! Daily-word HTTP API client

use super::{ServiceError, WordProvider, WordValidator};
use crate::config::ServiceConfig;
use crate::core::Word;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Body of the word-of-the-day response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    pub word: String,
}

/// Body posted to the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub word: String,
}

/// Validator verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(rename = "validWord")]
    pub valid_word: bool,
}

/// Blocking client for the word-of-the-day and validate-word endpoints
#[derive(Debug, Clone)]
pub struct HttpWordService {
    config: ServiceConfig,
    client: Client,
}

impl HttpWordService {
    /// # Errors
    /// Returns `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .user_agent(concat!("wordle_daily/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn check_status(url: &str, response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ServiceError::Status {
                url: url.to_string(),
                status,
            })
        }
    }
}

impl WordProvider for HttpWordService {
    fn fetch_target(&self) -> Result<Word, ServiceError> {
        let url = &self.config.word_url;
        debug!(%url, "fetching word of the day");

        let response = Self::check_status(url, self.client.get(url).send()?)?;
        let payload: WordOfTheDay = response.json()?;

        let word = Word::new(&payload.word).map_err(|source| ServiceError::InvalidTarget {
            word: payload.word.clone(),
            source,
        })?;
        info!("target word fetched");
        Ok(word)
    }
}

impl WordValidator for HttpWordService {
    fn is_valid(&self, word: &Word) -> Result<bool, ServiceError> {
        let url = &self.config.validate_url;
        let body = ValidateRequest {
            word: word.text().to_string(),
        };

        let response = Self::check_status(url, self.client.post(url).json(&body).send()?)?;
        let verdict: ValidateResponse = response.json()?;

        debug!(guess = %word, valid = verdict.valid_word, "validated guess");
        Ok(verdict.valid_word)
    }
}
