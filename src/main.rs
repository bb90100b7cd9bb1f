use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use idlak_server::controllers::speech::SpeechController;
use idlak_server::domain::speech::SpeechService;
use idlak_server::infrastructure::config::{Config, LogFormat};
use idlak_server::infrastructure::http::{build_router, start_http_server};
use idlak_server::infrastructure::repositories::UnavailableSpeechRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting speech server on {}:{}",
        config.host,
        config.port
    );

    if config.auth_required {
        tracing::info!("Bearer token authentication enabled for /speech");
    } else if !config.is_development() {
        tracing::warn!("AUTH_REQUIRED is false in production, /speech is open to anonymous callers");
    }

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Synthesis backend (none wired in yet)
    let speech_repo = Arc::new(UnavailableSpeechRepository::new());
    tracing::warn!("No synthesis engine configured, POST /speech will answer 501");

    // 2. Services
    let speech_service = Arc::new(SpeechService::new(speech_repo));

    // 3. Controllers
    let speech_controller = Arc::new(SpeechController::new(speech_service.clone()));

    let app = build_router(&config, speech_controller, speech_service);

    start_http_server(&config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "idlak_server=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "idlak_server=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
