use super::dto::{SpeechRequest, SynthesizedAudio};
use super::error::SpeechServiceError;
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
}

impl SpeechService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>) -> Self {
        Self { speech_repo }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech for a validated request
    ///
    /// Dispatches to the configured speech repository. Without an engine this
    /// always fails with `SpeechServiceError::NotImplemented`.
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, SpeechServiceError>;

    /// Availability label reported by the readiness probe
    fn availability(&self) -> &'static str;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, SpeechServiceError> {
        tracing::info!(
            voice_id = %request.voice_id,
            text_length = request.text.chars().count(),
            streaming = request.streaming,
            audio_format = %request.audio_format,
            "Speech synthesis request"
        );

        let audio = self.speech_repo.synthesize(&request).await?;

        if audio.format != request.audio_format {
            return Err(SpeechServiceError::Dependency(format!(
                "engine returned {} audio, {} was requested",
                audio.format, request.audio_format
            )));
        }

        tracing::info!(
            voice_id = %request.voice_id,
            audio_size = audio.audio_data.len(),
            "Speech synthesized"
        );

        Ok(audio)
    }

    fn availability(&self) -> &'static str {
        if self.speech_repo.is_available() {
            "available"
        } else {
            "not_implemented"
        }
    }
}
