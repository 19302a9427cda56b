use std::sync::Arc;

use crate::config::Config;
use crate::llm::{ChatCompletion, OpenAiCompatibleClient};
use crate::news::{NewsApiClient, NewsRetriever};
use crate::summarizer::Summarizer;
use crate::tts::{AudioStore, SpeechSynthesizer, TtsFactory};

/// Everything a request handler needs, built once at startup.
/// Holds no per-request or per-client data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub news: Arc<dyn NewsRetriever>,
    pub summarizer: Arc<Summarizer>,
    pub tts: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let news = Arc::new(NewsApiClient::new(config.news.clone()));
        let llm = Arc::new(OpenAiCompatibleClient::new(
            config.llm.base_url.clone(),
            config.llm.api_key.clone(),
        ));
        let tts = TtsFactory::create_tts(
            &config.tts,
            AudioStore::new(config.system.output_path()),
        )?;
        Ok(Self::from_parts(config, news, llm, tts))
    }

    /// Assemble state from already constructed collaborators
    pub fn from_parts(
        config: Config,
        news: Arc<dyn NewsRetriever>,
        llm: Arc<dyn ChatCompletion>,
        tts: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        let summarizer = Arc::new(Summarizer::new(llm, &config.llm));
        Self {
            config: Arc::new(config),
            news,
            summarizer,
            tts,
        }
    }
}
