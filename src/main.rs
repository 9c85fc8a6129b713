use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod db;
mod error;
mod league;
mod models;
mod routes;

use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting league api server...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let pool = db::connect(&config.database_url).await?;
    tracing::info!("Database connection established.");

    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set, all write endpoints will answer 403");
    }

    // The public site and the back office are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            pool,
            admin_token: config.admin_token,
        });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Server listening on {}", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
