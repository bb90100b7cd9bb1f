use crate::e2e::helpers;

use helpers::{generate_test_jwt, generate_test_jwt_expiring_in, AuthTestContext, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

fn speech_body() -> serde_json::Value {
    json!({ "voice_id": "v1", "text": "hello" })
}

fn secret(ctx: &AuthTestContext) -> &str {
    ctx.config.jwt_secret.as_deref().unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_require_auth_by_default(ctx: &TestContext) {
    let response = ctx.client.post("/speech", &speech_body()).await.unwrap();

    response.assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_reject_missing_token(ctx: &AuthTestContext) {
    let response = ctx.client.post("/speech", &speech_body()).await.unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Missing authorization header");
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_reject_token_signed_with_other_secret(ctx: &AuthTestContext) {
    let token = generate_test_jwt("caller-1", "some-other-secret");

    let response = ctx
        .client
        .post_with_auth("/speech", &speech_body(), &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid token");
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_reject_expired_token(ctx: &AuthTestContext) {
    let token = generate_test_jwt_expiring_in("caller-1", secret(ctx), chrono::Duration::hours(-2));

    let response = ctx
        .client
        .post_with_auth("/speech", &speech_body(), &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_pass_valid_token_through_to_handler(ctx: &AuthTestContext) {
    let token = generate_test_jwt("caller-1", secret(ctx));

    let response = ctx
        .client
        .post_with_auth("/speech", &speech_body(), &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_validate_body_after_authentication(ctx: &AuthTestContext) {
    let token = generate_test_jwt("caller-1", secret(ctx));

    let response = ctx
        .client
        .post_with_auth("/speech", &json!({ "text": "hello" }), &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("voice_id");
}

#[test_context(AuthTestContext)]
#[tokio::test]
async fn it_should_keep_health_checks_public(ctx: &AuthTestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);
}
