use crate::error::AppError;
use crate::infrastructure::repositories::SpeechRepositoryError;

pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented yet";

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("{0}")]
    NotImplemented(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechRepositoryError> for SpeechServiceError {
    fn from(err: SpeechRepositoryError) -> Self {
        match err {
            SpeechRepositoryError::NotImplemented => {
                SpeechServiceError::NotImplemented(NOT_IMPLEMENTED_MESSAGE.to_string())
            }
            SpeechRepositoryError::UnknownVoice(voice) => {
                SpeechServiceError::Invalid(format!("Unknown voice '{}'", voice))
            }
            SpeechRepositoryError::Provider(msg) => SpeechServiceError::Dependency(msg),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::NotImplemented(msg) => AppError::NotImplemented(msg),
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Dependency(msg) => AppError::ExternalService(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
