// Shared stubs for the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use newsdash_backend::config::Config;
use newsdash_backend::llm::{ChatCompletion, ChatMessage, CompletionOptions};
use newsdash_backend::news::{Article, NewsRetriever, SearchRequest};
use newsdash_backend::tts::{AudioArtifact, AudioStore, SpeechSynthesizer, VoiceRequest};
use newsdash_backend::AppState;

/// Retriever returning a fixed article list, or failing, and recording requests
pub struct StubRetriever {
    pub articles: Vec<Article>,
    pub fail_with: Option<String>,
    pub searches: Mutex<Vec<SearchRequest>>,
    pub headline_calls: Mutex<usize>,
}

impl StubRetriever {
    pub fn returning(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            articles,
            fail_with: None,
            searches: Mutex::new(Vec::new()),
            headline_calls: Mutex::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            articles: Vec::new(),
            fail_with: Some(message.to_string()),
            searches: Mutex::new(Vec::new()),
            headline_calls: Mutex::new(0),
        })
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsRetriever for StubRetriever {
    async fn search(&self, request: &SearchRequest) -> anyhow::Result<Vec<Article>> {
        self.searches.lock().unwrap().push(request.clone());
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(self.articles.clone()),
        }
    }

    async fn top_headlines(&self) -> anyhow::Result<Vec<Article>> {
        *self.headline_calls.lock().unwrap() += 1;
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(self.articles.clone()),
        }
    }
}

/// Chat model that echoes a fixed reply and fails for user messages
/// containing `fail_on`
pub struct StubLlm {
    pub reply: String,
    pub fail_on: Option<String>,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_on(reply: &str, needle: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            fail_on: Some(needle.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for StubLlm {
    async fn complete(&self, messages: Vec<ChatMessage>, _options: &CompletionOptions) -> anyhow::Result<String> {
        let user = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        self.calls.lock().unwrap().push(messages);
        if let Some(needle) = &self.fail_on {
            if user.contains(needle.as_str()) {
                anyhow::bail!("model unavailable");
            }
        }
        Ok(self.reply.clone())
    }
}

/// Synthesizer writing fixed bytes through a real `AudioStore`
pub struct StubTts {
    pub store: AudioStore,
    pub fail: bool,
    pub requests: Mutex<Vec<VoiceRequest>>,
}

impl StubTts {
    pub fn new(store: AudioStore, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            store,
            fail,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for StubTts {
    async fn synthesize(&self, request: &VoiceRequest) -> anyhow::Result<AudioArtifact> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            anyhow::bail!("quota exceeded");
        }
        self.store.save(b"ID3fake-mp3").await
    }
}

pub fn articles(n: usize) -> Vec<Article> {
    (1..=n)
        .map(|i| {
            Article::new(format!("Article {}", i), format!("https://news.example/{}", i))
                .with_description(format!("Description {}", i))
        })
        .collect()
}

pub fn state_with(
    output_dir: &std::path::Path,
    news: Arc<StubRetriever>,
    llm: Arc<StubLlm>,
    tts: Arc<StubTts>,
) -> AppState {
    let mut config = Config::default();
    config.system.output_dir = output_dir.to_string_lossy().into_owned();
    AppState::from_parts(config, news, llm, tts)
}
