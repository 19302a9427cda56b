use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

use super::interface::{AudioArtifact, AUDIO_MIME_TYPE};

/// Route prefix the output directory is served under
pub const OUTPUT_ROUTE: &str = "/output";

/// Writes synthesized audio into the shared output directory.
/// Every file gets a fresh UUID name, so concurrent requests never collide.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn save(&self, bytes: &[u8]) -> Result<AudioArtifact> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("cannot create output directory {}", self.dir.display()))?;

        let file_name = format!("{}.mp3", Uuid::new_v4());
        let file_path = self.dir.join(&file_name);
        tokio::fs::write(&file_path, bytes)
            .await
            .with_context(|| format!("cannot write {}", file_path.display()))?;
        debug!("Wrote {} bytes of audio to {}", bytes.len(), file_path.display());

        Ok(AudioArtifact {
            url: format!("{}/{}", OUTPUT_ROUTE, file_name),
            file_name,
            file_path,
            mime_type: AUDIO_MIME_TYPE.to_string(),
        })
    }
}
