pub mod speech_repository;
pub mod unavailable_speech_repository;

pub use speech_repository::{SpeechRepository, SpeechRepositoryError};
pub use unavailable_speech_repository::UnavailableSpeechRepository;
