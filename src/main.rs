mod settings;

use std::sync::Arc;

use anyhow::Context;
use crier_client::GameClient;
use crier_core::IncomingMessage;
use crier_engine::GameUpdateProvider;
use crier_llm::{OpenRouterConfig, OpenRouterGenerator};
use crier_store::SqliteMarkerStore;
use uuid::Uuid;

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().context("loading settings")?;
    tracing::info!(game_url = %settings.game_url, "starting crier");

    let store = SqliteMarkerStore::open(&settings.db_path).context("opening marker store")?;

    let mut llm_config = OpenRouterConfig::new(settings.openrouter_api_key.clone());
    llm_config.base_url = settings.openrouter_base_url.clone();

    let provider = GameUpdateProvider::new(
        GameClient::new(settings.game_url.clone()),
        Arc::new(store),
        Arc::new(OpenRouterGenerator::new(llm_config)),
    );

    let mut ticker = tokio::time::interval(settings.poll_interval);
    tracing::info!(
        interval_secs = settings.poll_interval.as_secs(),
        "crier ready"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let trigger = IncomingMessage::post_update(Uuid::now_v7().to_string());
                match provider.provide(&trigger).await {
                    Ok(directive) if directive.is_empty() => {
                        tracing::debug!("nothing to post");
                    }
                    Ok(directive) => {
                        tracing::info!("composed post directive");
                        println!("{directive}");
                    }
                    Err(error) => {
                        tracing::error!(%error, "provider invocation failed");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
