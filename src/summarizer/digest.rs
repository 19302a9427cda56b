use serde::Serialize;

use super::prompts::{DIGEST_BANNER, ITEM_FAILED_MARKER};
use crate::news::Article;

/// Outcome for one selected headline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemSummary {
    Summarized {
        translated_title: String,
        summary: String,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestItem {
    pub article: Article,
    pub outcome: ItemSummary,
}

impl DigestItem {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ItemSummary::Failed { .. })
    }

    /// Display block: `#<title>` line followed by the summary or failure text.
    pub fn render(&self) -> String {
        match &self.outcome {
            ItemSummary::Summarized {
                translated_title,
                summary,
            } => format!("#{}\n{}", translated_title, summary),
            ItemSummary::Failed { reason } => {
                format!("#{}\n{}: {}", self.article.title, ITEM_FAILED_MARKER, reason)
            }
        }
    }
}

/// Per-headline summaries, one item per selected headline in selection order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineDigest {
    pub banner: String,
    pub items: Vec<DigestItem>,
}

impl HeadlineDigest {
    pub fn new(items: Vec<DigestItem>) -> Self {
        Self {
            banner: DIGEST_BANNER.to_string(),
            items,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_failed()).count()
    }

    /// Banner and blocks separated by blank lines.
    pub fn render(&self) -> String {
        std::iter::once(self.banner.clone())
            .chain(self.items.iter().map(DigestItem::render))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
