//! One function per user action. Each runs its steps in order and returns a
//! view-model; failures end the run early and come back as part of the view.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{describe, PipelineError, PipelineResult};
use crate::news::{Article, SearchInput};
use crate::presentation::{self, AudioView, NewsView};
use crate::state::AppState;
use crate::tts::{AudioArtifact, Voice, VoiceRequest};

pub const NOTHING_TO_READ: &str = "읽을 요약이 없습니다.";

/// Search, then summarize whatever was found.
pub async fn search_news(state: &AppState, input: &SearchInput, today: NaiveDate) -> NewsView {
    let request = match input.build(today) {
        Ok(request) => request,
        Err(err) => return presentation::alert(&err),
    };
    info!(
        "Searching news: keyword={:?} language={} page_size={} range={}..{}",
        request.keyword, request.language, request.page_size, request.start_date, request.end_date
    );

    let articles = match state.news.search(&request).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!("News search failed: {:#}", e);
            return presentation::alert(&PipelineError::Retrieval(describe(&e)));
        }
    };
    if articles.is_empty() {
        return presentation::no_results();
    }

    let summary = state.summarizer.summarize_batch(&articles).await;
    presentation::results(&articles, Some(summary))
}

/// Current top headlines, listed without a summary.
pub async fn headline_list(state: &AppState) -> NewsView {
    match state.news.top_headlines().await {
        Ok(articles) if articles.is_empty() => presentation::no_results(),
        Ok(articles) => presentation::results(&articles, None),
        Err(e) => {
            warn!("Headline fetch failed: {:#}", e);
            presentation::alert(&PipelineError::Retrieval(describe(&e)))
        }
    }
}

/// Translate and summarize the headlines the user picked.
pub async fn headline_digest(state: &AppState, selected: &[Article]) -> NewsView {
    if selected.is_empty() {
        return presentation::no_selection();
    }
    info!("Summarizing {} selected headlines", selected.len());
    let digest = state.summarizer.summarize_headlines(selected).await;
    if digest.failed_count() > 0 {
        warn!("{} of {} headline summaries failed", digest.failed_count(), digest.items.len());
    }
    presentation::digest(digest)
}

/// Read `text` aloud with the chosen voice.
pub async fn speak(state: &AppState, text: &str, voice: Option<&str>, speaking_rate: Option<f32>) -> AudioView {
    presentation::audio(synthesize(state, text, voice, speaking_rate).await)
}

async fn synthesize(
    state: &AppState,
    text: &str,
    voice: Option<&str>,
    speaking_rate: Option<f32>,
) -> PipelineResult<AudioArtifact> {
    if text.trim().is_empty() {
        return Err(PipelineError::Validation(NOTHING_TO_READ.to_string()));
    }
    let voice = match voice.map(str::trim).filter(|v| !v.is_empty()) {
        Some(id) => id
            .parse::<Voice>()
            .map_err(|e| PipelineError::Validation(describe(&e)))?,
        None => Voice::default(),
    };

    let request = VoiceRequest::new(text.trim(), voice, speaking_rate);
    state.tts.synthesize(&request).await.map_err(|e| {
        warn!("Speech synthesis failed: {:#}", e);
        PipelineError::Synthesis(describe(&e))
    })
}
