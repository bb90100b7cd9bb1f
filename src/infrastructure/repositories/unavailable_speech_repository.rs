use super::speech_repository::{SpeechRepository, SpeechRepositoryError};
use crate::domain::speech::{SpeechRequest, SynthesizedAudio};
use async_trait::async_trait;

/// Placeholder used until a synthesis engine is wired in.
/// Every request is answered with `NotImplemented`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSpeechRepository;

impl UnavailableSpeechRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechRepository for UnavailableSpeechRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesizedAudio, SpeechRepositoryError> {
        tracing::debug!(
            voice_id = %request.voice_id,
            audio_format = %request.audio_format,
            "No synthesis engine configured"
        );
        Err(SpeechRepositoryError::NotImplemented)
    }

    fn is_available(&self) -> bool {
        false
    }
}
