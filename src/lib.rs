//! Backend for the news summary dashboard: searches a news API, summarizes
//! the results through a chat completion model, optionally reads the summary
//! aloud, and hands view-models to the browser.

pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod news;
pub mod pipeline;
pub mod presentation;
pub mod routes;
pub mod state;
pub mod summarizer;
pub mod tts;

pub use config::Config;
pub use error::{PipelineError, PipelineResult};
pub use state::AppState;
