use serde::{Deserialize, Serialize};

/// A single news article as used throughout one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build from one upstream entry; `None` when title or url is missing or blank.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = non_blank(raw.title)?;
        let url = non_blank(raw.url)?;
        Some(Self {
            title,
            url,
            description: non_blank(raw.description),
        })
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Article object as returned by the news API. Any field may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Successful response body of `/everything` and `/top-headlines`
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Error body the news API returns alongside a non-2xx status
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}
