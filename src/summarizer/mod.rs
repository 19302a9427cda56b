pub mod digest;
pub mod prompts;

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::config::LlmConfig;
use crate::error::{describe, PipelineError, PipelineResult};
use crate::llm::{ChatCompletion, ChatMessage, CompletionOptions};
use crate::news::Article;

pub use digest::{DigestItem, HeadlineDigest, ItemSummary};

/// Narrative summary together with the articles it was written from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub text: String,
    pub source_articles: Vec<Article>,
}

/// Turns article lists into prose through a chat completion model
pub struct Summarizer {
    llm: Arc<dyn ChatCompletion>,
    narrative_options: CompletionOptions,
    digest_options: CompletionOptions,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn ChatCompletion>, config: &LlmConfig) -> Self {
        Self {
            llm,
            narrative_options: CompletionOptions {
                model: config.model.clone(),
                max_tokens: Some(config.max_tokens),
                temperature: Some(config.temperature),
            },
            digest_options: CompletionOptions {
                model: config.digest_model.clone(),
                max_tokens: None,
                temperature: Some(config.temperature),
            },
        }
    }

    /// One narrative over all article titles.
    ///
    /// With no articles the static no-news text is returned and the model is
    /// not called.
    pub async fn summarize_batch(&self, articles: &[Article]) -> PipelineResult<SummaryResult> {
        if articles.is_empty() {
            return Ok(SummaryResult {
                text: prompts::NO_NEWS_TEXT.to_string(),
                source_articles: Vec::new(),
            });
        }

        let body = prompts::narrative_prompt_body(articles.iter().map(|a| a.title.as_str()));
        let messages = vec![
            ChatMessage::system(prompts::NARRATIVE_SYSTEM_PROMPT),
            ChatMessage::user(body),
        ];
        debug!("Summarizing {} articles", articles.len());

        match self.llm.complete(messages, &self.narrative_options).await {
            Ok(text) => Ok(SummaryResult {
                text: text.trim().to_string(),
                source_articles: articles.to_vec(),
            }),
            Err(e) => {
                error!("Narrative summary failed: {:#}", e);
                Err(PipelineError::Summarization(describe(&e)))
            }
        }
    }

    /// Translate and summarize each selected headline on its own.
    ///
    /// A failure only affects its own item; every item is attempted.
    pub async fn summarize_headlines(&self, selected: &[Article]) -> HeadlineDigest {
        let mut items = Vec::with_capacity(selected.len());
        for article in selected {
            let outcome = match self.summarize_headline(article).await {
                Ok((translated_title, summary)) => ItemSummary::Summarized {
                    translated_title,
                    summary,
                },
                Err(e) => {
                    warn!("Summary for {:?} failed: {:#}", article.title, e);
                    ItemSummary::Failed { reason: describe(&e) }
                }
            };
            items.push(DigestItem {
                article: article.clone(),
                outcome,
            });
        }
        HeadlineDigest::new(items)
    }

    async fn summarize_headline(&self, article: &Article) -> anyhow::Result<(String, String)> {
        let translated = self
            .llm
            .complete(
                vec![
                    ChatMessage::system(prompts::TRANSLATE_SYSTEM_PROMPT),
                    ChatMessage::user(article.title.clone()),
                ],
                &self.digest_options,
            )
            .await?;

        let content = format!(
            "{}\n{}",
            article.title,
            article.description.as_deref().unwrap_or_default()
        );
        let summary = self
            .llm
            .complete(
                vec![
                    ChatMessage::system(prompts::HEADLINE_SUMMARY_SYSTEM_PROMPT),
                    ChatMessage::user(content),
                ],
                &self.digest_options,
            )
            .await?;

        Ok((translated.trim().to_string(), summary.trim().to_string()))
    }
}
