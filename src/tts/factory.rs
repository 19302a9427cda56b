use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use super::client::CloudTtsClient;
use super::credentials::{ServiceAccountKey, TtsAuth};
use super::interface::SpeechSynthesizer;
use super::store::AudioStore;
use crate::config::TtsConfig;

/// Factory for the speech synthesizer
pub struct TtsFactory;

impl TtsFactory {
    /// Create the synthesizer described by `tts_config`, writing into `store`.
    ///
    /// A configured credentials file must be readable; an absent one falls
    /// back to the API key, then to unauthenticated requests.
    pub fn create_tts(tts_config: &TtsConfig, store: AudioStore) -> Result<Arc<dyn SpeechSynthesizer>> {
        let auth = Self::resolve_auth(tts_config)?;
        info!(
            "Initializing TTS: base_url={}, language={}, auth={}",
            tts_config.base_url,
            tts_config.language_code,
            Self::auth_label(&auth)
        );
        Ok(Arc::new(CloudTtsClient::new(
            tts_config.base_url.clone(),
            tts_config.language_code.clone(),
            auth,
            store,
        )))
    }

    pub fn resolve_auth(tts_config: &TtsConfig) -> Result<TtsAuth> {
        if let Some(path) = tts_config.credentials_file() {
            return Ok(TtsAuth::ServiceAccount(ServiceAccountKey::from_file(&path)?));
        }
        let key = tts_config.api_key.trim();
        if key.is_empty() {
            warn!("TTS requests will be sent without credentials");
            return Ok(TtsAuth::Anonymous);
        }
        Ok(TtsAuth::ApiKey(key.to_string()))
    }

    fn auth_label(auth: &TtsAuth) -> &'static str {
        match auth {
            TtsAuth::ServiceAccount(_) => "service_account",
            TtsAuth::ApiKey(_) => "api_key",
            TtsAuth::Anonymous => "none",
        }
    }
}
