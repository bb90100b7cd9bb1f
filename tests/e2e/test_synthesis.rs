use crate::e2e::helpers;

use helpers::{fake_engine::UNKNOWN_VOICE, EngineTestContext};
use hyper::StatusCode;
use idlak_server::domain::speech::{AudioFormat, SpeechRequest};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(EngineTestContext)]
#[tokio::test]
async fn it_should_return_audio_with_defaults_applied(ctx: &EngineTestContext) {
    let response = ctx
        .client
        .post("/speech", &json!({ "voice_id": "v1", "text": "hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav")
        .assert_header("x-audio-format", "wav");
    assert_eq!(response.body_bytes, b"wav:hello".to_vec());

    assert_eq!(
        ctx.engine.requests(),
        vec![SpeechRequest {
            voice_id: "v1".to_string(),
            text: "hello".to_string(),
            streaming: false,
            audio_format: AudioFormat::Wav,
        }]
    );
}

#[test_context(EngineTestContext)]
#[tokio::test]
async fn it_should_forward_requested_options(ctx: &EngineTestContext) {
    let response = ctx
        .client
        .post(
            "/speech",
            &json!({
                "voice_id": "alba",
                "text": "Good morning",
                "streaming": "true",
                "audio_format": "mp3"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg");

    let requests = ctx.engine.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].streaming);
    assert_eq!(requests[0].audio_format, AudioFormat::Mp3);
    assert_eq!(requests[0].voice_id, "alba");
}

#[test_context(EngineTestContext)]
#[tokio::test]
async fn it_should_not_reach_engine_when_validation_fails(ctx: &EngineTestContext) {
    let response = ctx
        .client
        .post("/speech", &json!({ "voice_id": "v1", "audio_format": "flac" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.violations().len(), 2);
    assert!(ctx.engine.requests().is_empty());
}

#[test_context(EngineTestContext)]
#[tokio::test]
async fn it_should_report_unknown_voice_as_client_error(ctx: &EngineTestContext) {
    let response = ctx
        .client
        .post("/speech", &json!({ "voice_id": UNKNOWN_VOICE, "text": "hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message(UNKNOWN_VOICE);
}
