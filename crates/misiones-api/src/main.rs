//! Misiones site API server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use misiones_api::config::Config;
use misiones_api::error::AppError;
use misiones_api::state::{AppState, Settings};
use misiones_core::clock::{Clock, SystemClock};
use misiones_core::rng::{DeterministicRng, OsSeededRng};
use misiones_gateway::{EmailRelay, EmailRelayCredentials, HttpNewsSource};
use misiones_regions::application::map_loader::{RegionMap, load_region_map};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Misiones site API server");

    let config = Config::from_env()?;

    let region_map = match &config.region_map_path {
        Some(path) => load_region_map(path)?,
        None => RegionMap::bundled()?,
    };

    // One HTTP client shared by both adapters.
    let client = reqwest::Client::builder()
        .user_agent(concat!("misiones-api/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let news_source = Arc::new(HttpNewsSource::new(client.clone(), &config.news_api_base_url));
    let message_relay = Arc::new(EmailRelay::new(
        client,
        config.email_relay_url.clone(),
        EmailRelayCredentials {
            service_id: config.email_service_id.clone(),
            template_id: config.email_template_id.clone(),
            public_key: config.email_public_key.clone(),
        },
    ));

    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(OsSeededRng::new()));
    let app_state = AppState::new(
        clock,
        rng,
        news_source,
        message_relay,
        region_map,
        Settings {
            desktop_breakpoint: config.desktop_breakpoint,
            news_page_size: config.news_page_size,
        },
    );

    // TODO: Replace CorsLayer::permissive() with the site's origin once it is fixed per deployment.
    let app = misiones_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
