mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod state;
mod views;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use skylapp_client::ApiClient;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skylapp_dashboard=debug,skylapp_client=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let api = ApiClient::new(config.api_url.as_str(), config.api_timeout)?;
    tracing::info!("Forwarding to API at {}", api.base_url());

    let app = routes::app(AppState::new(Arc::new(api), &config));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
