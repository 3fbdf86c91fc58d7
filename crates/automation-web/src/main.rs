//! automation-web: serves the product automation viewer.
//!
//! Configuration comes from the environment (and `.env`), see
//! [`automation_web::config`]. The rules table is loaded before binding; a
//! missing file or sheet stops the process.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use automation_core::load_dataset;
use automation_web::config::ServerConfig;
use automation_web::router::build_router;
use automation_web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,automation_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let dataset = match load_dataset(&config.source) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load rules table: {}", e);
            if e.is_missing_source() {
                tracing::error!(
                    "Check AUTOMATION_DATA_PATH and AUTOMATION_SHEET (currently {} / {})",
                    config.source.path.display(),
                    config.source.sheet
                );
            }
            return Err(e).with_context(|| {
                format!("cannot start without {}", config.source.path.display())
            });
        }
    };

    let app = build_router(AppState::new(dataset), &config.assets_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("automation-web listening on http://{}", config.bind_addr);
    tracing::info!("Serving assets from: {}", config.assets_dir.display());

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
