use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, speech::SpeechController};
use crate::domain::{auth::JwtManager, speech::SpeechService};
use crate::error::AppError;
use crate::infrastructure::auth::{auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;

/// Register every route of the service
pub fn build_router(
    config: &Config,
    speech_controller: Arc<SpeechController>,
    speech_service: Arc<SpeechService>,
) -> Router {
    let mut speech_routes = Router::new()
        .route("/speech", post(SpeechController::synthesize))
        .with_state(speech_controller);

    // Auth is opt-in; Config guarantees a secret whenever it is required
    if let Some(secret) = config.jwt_secret.as_ref().filter(|_| config.auth_required) {
        let jwt_manager = Arc::new(JwtManager::new(secret.clone()));
        speech_routes =
            speech_routes.route_layer(middleware::from_fn_with_state(jwt_manager, auth_middleware));
    }

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(speech_service)
        .merge(speech_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: &Config, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
