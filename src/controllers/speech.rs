use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::{
    domain::speech::{RequestSchema, SpeechRequest, SpeechService, SpeechServiceApi},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub const X_AUDIO_FORMAT: &str = "x-audio-format";

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    schema: RequestSchema,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self {
            speech_service,
            schema: RequestSchema::speech(),
        }
    }

    /// POST /speech - Convert text to speech with the given voice
    ///
    /// The body is checked against the speech schema before anything else;
    /// every violation is reported at once as a 400.
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        auth_user: Option<Extension<AuthUser>>,
        body: Bytes,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let payload = parse_body(&body)?;

        let fields = controller
            .schema
            .validate(&payload)
            .map_err(AppError::Validation)?;
        let request = SpeechRequest::from_fields(fields).map_err(AppError::Internal)?;

        if let Some(Extension(user)) = &auth_user {
            tracing::debug!(subject = %user.subject, "Authenticated speech request");
        }

        let audio = controller.speech_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(audio.format.mime_type()),
        );
        headers.insert(
            X_AUDIO_FORMAT,
            HeaderValue::from_static(audio.format.as_str()),
        );

        Ok((StatusCode::OK, headers, Body::from(audio.audio_data)))
    }
}

/// Decode the request body as a JSON object. An empty body reads as `{}`.
fn parse_body(body: &[u8]) -> AppResult<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::BadRequest(format!("Malformed JSON body: {}", e))),
    }
}
