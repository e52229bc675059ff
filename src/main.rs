use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kindred::error::{KindredError, Result};
use kindred::persist::load_family_data;
use kindred::server::{AppState, router};
use kindred::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // One-time load: settings and dataset are resolved here and passed
    // into the server explicitly, never cached behind a global.
    let settings = Settings::load()?;
    let data = load_family_data(&settings.data_file);
    info!(
        generations = data.generations.len(),
        people = data.people().count(),
        "family data loaded"
    );

    let bind = settings.bind.clone();
    let state = AppState {
        settings: Arc::new(settings),
        data: Arc::new(data),
    };

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| KindredError::Server(e.to_string()))?;
    info!(%bind, "kindred listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| KindredError::Server(e.to_string()))?;
    Ok(())
}
