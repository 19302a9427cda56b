use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::interface::NewsRetriever;
use super::query::SearchRequest;
use super::types::{ApiErrorResponse, Article, ArticlesResponse, RawArticle};
use crate::config::NewsApiConfig;

/// HTTP client for a newsapi.org compatible service
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn fetch(&self, endpoint: &str, params: Vec<(&'static str, String)>) -> Result<Vec<RawArticle>> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!("GET {} params={:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .query(&params)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            // the request url carries the api key
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request to {} failed", endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(&body).unwrap_or(body);
            error!("News API {} returned {}: {}", endpoint, status, message);
            anyhow::bail!("{} ({})", message.trim(), status);
        }

        let parsed: ArticlesResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("invalid response body from {}", endpoint))?;
        debug!("News API {} returned {} raw articles", endpoint, parsed.articles.len());
        Ok(parsed.articles)
    }
}

/// Pull the human readable message out of a news API error body.
fn upstream_message(body: &str) -> Option<String> {
    let parsed: ApiErrorResponse = serde_json::from_str(body).ok()?;
    match (parsed.code, parsed.message) {
        (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
        (None, Some(message)) => Some(message),
        _ => None,
    }
}

#[async_trait]
impl NewsRetriever for NewsApiClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>> {
        let raw = self.fetch("everything", request.query_params()).await?;
        Ok(raw.into_iter().filter_map(Article::from_raw).collect())
    }

    async fn top_headlines(&self) -> Result<Vec<Article>> {
        let params = vec![
            ("category", self.config.headline_category.clone()),
            ("language", self.config.headline_language.clone()),
            ("pageSize", self.config.headline_page_size.to_string()),
        ];
        let raw = self.fetch("top-headlines", params).await?;
        Ok(raw
            .into_iter()
            .filter_map(Article::from_raw)
            .filter(Article::has_description)
            .collect())
    }
}
