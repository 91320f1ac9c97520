use std::{env, net::SocketAddr};

use blackwell_api::{
    app::{env::Envy, router::build_router},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "blackwell_api=debug,tower_http=info";

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match Envy::from_env() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    let state = AppState::from_envy(envy);

    match state.storage {
        Some(_) => tracing::info!("object storage enabled"),
        None => tracing::info!("object storage not configured, storage routes will return 503"),
    }
    if state.envy.runpod_api_key.is_none() {
        tracing::warn!("RUNPOD_API_KEY is not set, direct submissions will fail");
    }

    // app
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        tracing::error!(%e);
    }
}
