use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::PipelineError;
use crate::news::{Article, SearchInput};
use crate::pipeline;
use crate::presentation::{self, AudioView, NewsView};
use crate::state::AppState;
use crate::tts::Voice;

pub const INVALID_REQUEST: &str = "잘못된 요청입니다";

#[derive(Debug, Deserialize)]
pub struct DigestRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    pub voice: Option<String>,
    pub speaking_rate: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct VoiceList {
    pub voices: Vec<&'static str>,
    pub default: &'static str,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// A body that does not deserialize is answered like any other invalid input.
fn rejected(rejection: JsonRejection) -> PipelineError {
    warn!("Rejected request body: {}", rejection.body_text());
    PipelineError::Validation(format!("{}: {}", INVALID_REQUEST, rejection.body_text()))
}

pub async fn search_news(
    State(state): State<AppState>,
    body: Result<Json<SearchInput>, JsonRejection>,
) -> Json<NewsView> {
    let Json(input) = match body {
        Ok(input) => input,
        Err(rejection) => return Json(presentation::alert(&rejected(rejection))),
    };
    let today = chrono::Local::now().date_naive();
    Json(pipeline::search_news(&state, &input, today).await)
}

pub async fn list_headlines(State(state): State<AppState>) -> Json<NewsView> {
    Json(pipeline::headline_list(&state).await)
}

pub async fn digest_headlines(
    State(state): State<AppState>,
    body: Result<Json<DigestRequest>, JsonRejection>,
) -> Json<NewsView> {
    let Json(request) = match body {
        Ok(request) => request,
        Err(rejection) => return Json(presentation::alert(&rejected(rejection))),
    };
    Json(pipeline::headline_digest(&state, &request.articles).await)
}

pub async fn synthesize_speech(
    State(state): State<AppState>,
    body: Result<Json<SpeechRequest>, JsonRejection>,
) -> Json<AudioView> {
    let Json(request) = match body {
        Ok(request) => request,
        Err(rejection) => return Json(presentation::audio(Err(rejected(rejection)))),
    };
    Json(
        pipeline::speak(
            &state,
            &request.text,
            request.voice.as_deref(),
            request.speaking_rate,
        )
        .await,
    )
}

pub async fn list_voices() -> Json<VoiceList> {
    Json(VoiceList {
        voices: Voice::ALL.iter().map(Voice::id).collect(),
        default: Voice::default().id(),
    })
}
