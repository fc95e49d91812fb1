//! Herbalism session runner.
//!
//! Loads content, starts the runtime and replays a scripted harvest session,
//! logging every resolved interaction.
mod config;
mod session;

use anyhow::{Context, Result};
use config::CliConfig;
use runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::info!("Loading content from {}", config.data_dir.display());
    let content = config
        .content_factory()
        .load_all()
        .context("failed to load herbalism content")?;

    let runtime = Runtime::builder()
        .content(&content)
        .seed(config.seed)
        .player(session::farmer(config.player_level))
        .build()
        .await?;
    let handle = runtime.handle();

    session::seed_world(&handle).await?;
    session::run(&handle, config.player_level).await?;

    drop(handle);
    runtime.shutdown().await?;
    Ok(())
}
