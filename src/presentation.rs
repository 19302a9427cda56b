//! View-models handed to the browser. Everything here is a pure mapping from
//! pipeline outcomes; no decisions are made beyond picking the display shape.

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::news::Article;
use crate::summarizer::{DigestItem, HeadlineDigest, SummaryResult};
use crate::tts::AudioArtifact;

pub const NO_RESULTS_TEXT: &str = "❌ 관련 뉴스가 없습니다.";
pub const NO_SELECTION_TEXT: &str = "❌ 요약할 뉴스를 선택해주세요.";
pub const SUMMARY_HEADING: &str = "📝 GPT 줄거리 요약";
pub const LINK_LABEL: &str = "📎 자세히 보기";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBlock {
    pub heading: String,
    pub text: String,
    /// False when the text is an error message rather than a summary
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleEntry {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link_label: String,
}

impl From<&Article> for ArticleEntry {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            description: article.description.clone(),
            link_label: LINK_LABEL.to_string(),
        }
    }
}

/// What the news panel shows after a search or headline action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewsView {
    Alert {
        level: AlertLevel,
        message: String,
    },
    Results {
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<SummaryBlock>,
        articles: Vec<ArticleEntry>,
    },
    Digest {
        text: String,
        items: Vec<DigestItem>,
        failed: usize,
    },
}

/// What the audio slot shows after a speech request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioView {
    Player {
        src: String,
        mime_type: String,
        autoplay: bool,
    },
    Error {
        message: String,
    },
}

/// Display level and text for a failure, shared by every view that can
/// carry one.
pub fn failure_message(err: &PipelineError) -> (AlertLevel, String) {
    match err {
        PipelineError::Validation(reason) => (AlertLevel::Warning, format!("❌ {}", reason)),
        PipelineError::Retrieval(reason) => (AlertLevel::Danger, format!("❌ 오류 발생: {}", reason)),
        PipelineError::Summarization(reason) => {
            (AlertLevel::Danger, format!("❌ 요약 중 오류 발생: {}", reason))
        }
        PipelineError::Synthesis(reason) => {
            (AlertLevel::Danger, format!("❌ 음성 생성 중 오류 발생: {}", reason))
        }
    }
}

/// A failure that replaces the whole news panel.
pub fn alert(err: &PipelineError) -> NewsView {
    let (level, message) = failure_message(err);
    NewsView::Alert { level, message }
}

pub fn no_results() -> NewsView {
    NewsView::Alert {
        level: AlertLevel::Warning,
        message: NO_RESULTS_TEXT.to_string(),
    }
}

pub fn no_selection() -> NewsView {
    NewsView::Alert {
        level: AlertLevel::Warning,
        message: NO_SELECTION_TEXT.to_string(),
    }
}

/// Article list, optionally headed by the narrative summary. A failed summary
/// still renders in the summary slot, flagged as not ok.
pub fn results(articles: &[Article], summary: Option<PipelineResult<SummaryResult>>) -> NewsView {
    let summary = summary.map(|outcome| match outcome {
        Ok(result) => SummaryBlock {
            heading: SUMMARY_HEADING.to_string(),
            text: result.text,
            ok: true,
        },
        Err(err) => SummaryBlock {
            heading: SUMMARY_HEADING.to_string(),
            text: failure_message(&err).1,
            ok: false,
        },
    });
    NewsView::Results {
        summary,
        articles: articles.iter().map(ArticleEntry::from).collect(),
    }
}

pub fn digest(digest: HeadlineDigest) -> NewsView {
    NewsView::Digest {
        text: digest.render(),
        failed: digest.failed_count(),
        items: digest.items,
    }
}

pub fn audio(outcome: PipelineResult<AudioArtifact>) -> AudioView {
    match outcome {
        Ok(artifact) => AudioView::Player {
            src: artifact.url,
            mime_type: artifact.mime_type,
            autoplay: true,
        },
        Err(err) => AudioView::Error {
            message: failure_message(&err).1,
        },
    }
}
