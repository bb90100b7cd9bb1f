use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::schema::ValidatedFields;

/// Output encodings a client may request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Wav,
    Ogg,
    Mp3,
}

impl AudioFormat {
    /// Accepted values of the `audio_format` field
    pub const CHOICES: &'static [&'static str] = &["wav", "ogg", "mp3"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Mp3 => "mp3",
        }
    }

    /// MIME type sent as Content-Type for synthesized audio
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Ogg => "audio/ogg",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wav" => Ok(AudioFormat::Wav),
            "ogg" => Ok(AudioFormat::Ogg),
            "mp3" => Ok(AudioFormat::Mp3),
            other => Err(format!("unsupported audio format '{}'", other)),
        }
    }
}

/// A validated request for POST /speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub voice_id: String,
    pub text: String,
    pub streaming: bool,
    pub audio_format: AudioFormat,
}

impl SpeechRequest {
    /// Build the typed request from fields checked by `RequestSchema::speech`
    pub fn from_fields(mut fields: ValidatedFields) -> Result<Self, String> {
        let voice_id = fields
            .take("voice_id")
            .ok_or_else(|| "voice_id was not validated".to_string())?;
        let text = fields
            .take("text")
            .ok_or_else(|| "text was not validated".to_string())?;
        let streaming = fields.get("streaming") == Some("true");
        let audio_format = match fields.get("audio_format") {
            Some(value) => value.parse()?,
            None => AudioFormat::default(),
        };

        Ok(Self {
            voice_id,
            text,
            streaming,
            audio_format,
        })
    }
}

/// Audio produced by a synthesis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    pub format: AudioFormat,
}
