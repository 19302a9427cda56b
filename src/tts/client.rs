use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::credentials::TtsAuth;
use super::interface::{AudioArtifact, SpeechSynthesizer, VoiceRequest};
use super::store::AudioStore;

/// Client for a Google Cloud Text-to-Speech compatible endpoint
pub struct CloudTtsClient {
    client: Client,
    base_url: String,
    language_code: String,
    auth: TtsAuth,
    store: AudioStore,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl CloudTtsClient {
    pub fn new(base_url: String, language_code: String, auth: TtsAuth, store: AudioStore) -> Self {
        Self {
            client: Client::new(),
            base_url,
            language_code,
            auth,
            store,
        }
    }

    async fn fetch_audio(&self, request: &VoiceRequest) -> Result<Vec<u8>> {
        let url = format!("{}/text:synthesize", self.base_url.trim_end_matches('/'));
        let body = SynthesizeRequest {
            input: SynthesisInput { text: &request.text },
            voice: VoiceSelection {
                language_code: &self.language_code,
                name: request.voice.id(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: request.speaking_rate,
            },
        };
        debug!(
            "POST {} voice={} rate={} chars={}",
            url,
            request.voice,
            request.speaking_rate,
            request.text.chars().count()
        );

        let mut builder = self.client.post(&url).json(&body);
        builder = match &self.auth {
            TtsAuth::ServiceAccount(key) => {
                let token = key.fetch_access_token(&self.client).await?;
                builder.bearer_auth(token)
            }
            TtsAuth::ApiKey(key) => builder.query(&[("key", key.as_str())]),
            TtsAuth::Anonymous => builder,
        };

        // the request url may carry the api key
        let response = builder
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("speech request failed")?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("TTS endpoint returned {}: {}", status, text.trim());
            anyhow::bail!("TTS endpoint returned {}: {}", status, text.trim());
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let parsed: SynthesizeResponse = response
                .json()
                .await
                .map_err(reqwest::Error::without_url)
                .context("invalid TTS response")?;
            STANDARD
                .decode(parsed.audio_content.as_bytes())
                .context("audioContent is not valid base64")
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(reqwest::Error::without_url)
                .context("failed to read TTS audio")?;
            Ok(bytes.to_vec())
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for CloudTtsClient {
    async fn synthesize(&self, request: &VoiceRequest) -> Result<AudioArtifact> {
        if request.text.trim().is_empty() {
            anyhow::bail!("nothing to synthesize");
        }
        let audio = self.fetch_audio(request).await?;
        if audio.is_empty() {
            anyhow::bail!("TTS endpoint returned no audio");
        }
        self.store.save(&audio).await
    }
}
