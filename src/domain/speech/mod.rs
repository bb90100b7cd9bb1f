pub mod dto;
pub mod error;
pub mod schema;
pub mod service;

pub use dto::{AudioFormat, SpeechRequest, SynthesizedAudio};
pub use error::{SpeechServiceError, NOT_IMPLEMENTED_MESSAGE};
pub use schema::{RequestSchema, ValidatedFields, Violation};
pub use service::{SpeechService, SpeechServiceApi};
