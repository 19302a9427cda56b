use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;

use super::voices::Voice;

pub const MIN_SPEAKING_RATE: f32 = 0.5;
pub const MAX_SPEAKING_RATE: f32 = 1.5;
pub const DEFAULT_SPEAKING_RATE: f32 = 1.0;
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Text to synthesize together with voice settings
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceRequest {
    pub text: String,
    pub voice: Voice,
    pub speaking_rate: f32,
}

impl VoiceRequest {
    /// Speaking rate is clamped into `[0.5, 1.5]`; a missing or NaN rate means 1.0.
    pub fn new(text: impl Into<String>, voice: Voice, speaking_rate: Option<f32>) -> Self {
        let speaking_rate = speaking_rate
            .filter(|r| !r.is_nan())
            .map(|r| r.clamp(MIN_SPEAKING_RATE, MAX_SPEAKING_RATE))
            .unwrap_or(DEFAULT_SPEAKING_RATE);
        Self {
            text: text.into(),
            voice,
            speaking_rate,
        }
    }
}

/// An MP3 file written to the output directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioArtifact {
    pub file_name: String,
    #[serde(skip)]
    pub file_path: PathBuf,
    pub mime_type: String,
    /// Path under which the server exposes the file
    pub url: String,
}

/// Text-to-speech backend
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `request` and write the audio to a new file
    async fn synthesize(&self, request: &VoiceRequest) -> Result<AudioArtifact, anyhow::Error>;
}
