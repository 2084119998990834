/// News Client — wraps the NewsAPI `everything` search endpoint.
///
/// One GET per lookup: query by industry, newest first, page size fixed at 5.
/// Headlines come back as `"{title} - {source name}"` in upstream order.
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ApiError;

const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";
const PAGE_SIZE: u32 = 5;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    source: Source,
}

#[derive(Debug, Deserialize)]
struct Source {
    name: String,
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, NEWSAPI_URL.to_string())
    }

    /// Same client pointed at a different search endpoint.
    /// Used by tests to target a mock gateway.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetches the five most recent headlines matching an industry.
    pub async fn headlines(&self, industry: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", industry.to_string()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let news: NewsResponse = response.json().await?;

        Ok(news
            .articles
            .into_iter()
            .map(|a| format!("{} - {}", a.title, a.source.name))
            .collect())
    }
}
