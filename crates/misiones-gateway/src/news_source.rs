//! `NewsSource` backed by the public news endpoint of the remote API.

use async_trait::async_trait;
use misiones_core::error::DomainError;
use misiones_core::news::{NewsItem, NewsSource};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};

/// Path of the published-news collection under the API base URL.
pub const PUBLIC_NEWS_PATH: &str = "/api/news/public/";

/// Fetches the whole published collection with one GET per call.
#[derive(Debug, Clone)]
pub struct HttpNewsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpNewsSource {
    /// Creates a source for the API rooted at `base_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{PUBLIC_NEWS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL requested on every fetch.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("news request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Upstream(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        // A `null` body means no published news.
        let items = response
            .json::<Option<Vec<NewsItem>>>()
            .await
            .map_err(|e| DomainError::Upstream(format!("news payload is not valid: {e}")))?
            .unwrap_or_default();
        debug!(count = items.len(), "news fetched");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let source = HttpNewsSource::new(reqwest::Client::new(), "https://api.example.org/");

        assert_eq!(source.url(), "https://api.example.org/api/news/public/");
    }
}
