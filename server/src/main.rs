mod config;
mod db;
mod opensky;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,server=debug")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let sync_config = config::SyncConfig::from_env().expect("invalid sync configuration");

    // Persistence is optional: without DATABASE_URL the store is memory-only.
    let pool = match std::env::var("DATABASE_URL") {
        Ok(url) => Some(db::init_pool(&url).await.expect("database init failed")),
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, flights are kept in memory only");
            None
        }
    };

    let source = opensky::OpenSkyClient::new(&sync_config).expect("OpenSky client init failed");
    tracing::info!(api_url = source.api_url(), limit = sync_config.flight_limit, "OpenSky client initialized");

    let state = state::AppState::new(pool, Arc::new(source), sync_config);

    // Spawn background sync task.
    let _sync = services::sync::spawn_sync_task(state.clone());

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "skydeck listening");
    axum::serve(listener, app).await.expect("server failed");
}
