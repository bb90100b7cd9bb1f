use crate::domain::speech::{SpeechRequest, SynthesizedAudio};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SpeechRepositoryError {
    #[error("speech synthesis is not implemented")]
    NotImplemented,
    #[error("unknown voice: {0}")]
    UnknownVoice(String),
    #[error("provider error: {0}")]
    Provider(String),
}

/// Repository for speech synthesis.
/// Abstracts the engine that turns a validated request into audio.
///
/// Implementations are responsible for:
/// - Resolving `voice_id` to a voice profile
/// - Encoding the output in the requested `audio_format`
/// - Honouring the `streaming` hint where the engine supports it
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize the request's text with the requested voice and format
    ///
    /// # Errors
    /// Returns `NotImplemented` when no engine is wired in, `UnknownVoice`
    /// for voices the engine does not know, `Provider` for engine failures
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesizedAudio, SpeechRepositoryError>;

    /// Whether this repository can currently produce audio
    fn is_available(&self) -> bool;
}
