use async_trait::async_trait;
use idlak_server::{
    domain::speech::{SpeechRequest, SynthesizedAudio},
    infrastructure::repositories::{SpeechRepository, SpeechRepositoryError},
};
use std::sync::Mutex;

pub const UNKNOWN_VOICE: &str = "no-such-voice";

/// Fake engine: echoes "<format>:<text>" as audio bytes and remembers
/// every request it was given
#[derive(Default)]
pub struct RecordingSpeechRepository {
    requests: Mutex<Vec<SpeechRequest>>,
}

impl RecordingSpeechRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechRepository for RecordingSpeechRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesizedAudio, SpeechRepositoryError> {
        self.requests.lock().unwrap().push(request.clone());

        if request.voice_id == UNKNOWN_VOICE {
            return Err(SpeechRepositoryError::UnknownVoice(request.voice_id.clone()));
        }

        Ok(SynthesizedAudio {
            audio_data: format!("{}:{}", request.audio_format, request.text).into_bytes(),
            format: request.audio_format,
        })
    }

    fn is_available(&self) -> bool {
        true
    }
}
