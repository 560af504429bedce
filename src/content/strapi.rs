//! Content service client
//!
//! The article feed comes from a Strapi-style REST API. Only the
//! collection "find" call is used; its result is forwarded as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::Article;

/// Failures surfaced by the content service
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Content service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Source of articles for the demo feed
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the article collection
    async fn find_articles(&self) -> Result<Vec<Article>, UpstreamError>;
}

/// Collection envelope: `{ "data": [...], "meta": {...} }`
#[derive(Debug, Deserialize)]
struct Collection<T> {
    data: Vec<T>,
}

/// HTTP client for the Strapi REST API
pub struct StrapiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl StrapiClient {
    /// Create a new client for `base_url` (e.g. `http://localhost:1337`)
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        })
    }

    fn articles_url(&self) -> String {
        format!("{}/api/articles", self.base_url)
    }
}

#[async_trait]
impl ArticleSource for StrapiClient {
    async fn find_articles(&self) -> Result<Vec<Article>, UpstreamError> {
        let url = self.articles_url();
        tracing::debug!("Fetching articles from {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let articles = parse_collection(&body)?;
        tracing::debug!("Fetched {} articles", articles.len());
        Ok(articles)
    }
}

/// Decode a collection response body into articles
fn parse_collection(body: &str) -> Result<Vec<Article>, UpstreamError> {
    serde_json::from_str::<Collection<Article>>(body)
        .map(|collection| collection.data)
        .map_err(|e| UpstreamError::Decode(e.to_string()))
}

/// Fixed article list, used when no content service is configured
#[derive(Debug, Clone, Default)]
pub struct StaticArticles {
    articles: Vec<Article>,
}

impl StaticArticles {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleSource for StaticArticles {
    async fn find_articles(&self) -> Result<Vec<Article>, UpstreamError> {
        Ok(self.articles.clone())
    }
}
