pub mod client;
pub mod credentials;
pub mod factory;
pub mod interface;
pub mod store;
pub mod voices;

pub use client::CloudTtsClient;
pub use credentials::{ServiceAccountKey, TtsAuth};
pub use factory::TtsFactory;
pub use interface::{AudioArtifact, SpeechSynthesizer, VoiceRequest};
pub use store::AudioStore;
pub use voices::Voice;
