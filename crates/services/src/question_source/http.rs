use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::Client;
use url::Url;

use super::{QuestionSource, parse_questions};
use crate::error::QuestionSourceError;

/// Questions fetched with a single `GET` against a JSON endpoint.
#[derive(Clone, Debug)]
pub struct HttpQuestionSource {
    client: Client,
    url: Url,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Build a source whose request is abandoned after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::Http` if the HTTP client cannot be built.
    pub fn with_timeout(url: Url, timeout: Duration) -> Result<Self, QuestionSourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        parse_questions(&body)
    }
}
