use async_trait::async_trait;

use super::query::SearchRequest;
use super::types::Article;

/// Source of news articles.
///
/// Both calls return the normalized list in upstream order. An empty list is
/// a valid result; transport and HTTP failures are errors.
#[async_trait]
pub trait NewsRetriever: Send + Sync {
    /// Keyword search over the rolling window
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, anyhow::Error>;

    /// Current top headlines; every returned article carries a description
    async fn top_headlines(&self) -> Result<Vec<Article>, anyhow::Error>;
}
