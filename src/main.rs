use crate::config::QuipuConfig;
use crate::render::Renderer;
use crate::store::PageStore;
use crate::store::local::LocalPageStore;
use anyhow::Context;
use std::sync::Arc;

pub mod config;
mod domain;
mod features;
mod render;
mod store;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
    pub renderer: Arc<Renderer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = QuipuConfig::from_env();

    // verify the pages directory exists
    if !config.pages_dir.exists() {
        tracing::info!(
            "Pages directory {} not found, creating...",
            config.pages_dir.display()
        );
        std::fs::create_dir_all(&config.pages_dir).context(format!(
            "Failed to create pages directory {}",
            config.pages_dir.display()
        ))?;
    }

    // templates parse exactly once, before the listener binds
    // a broken or missing template stops the process here
    let renderer = Renderer::new(&config.templates_glob)?;

    let store = LocalPageStore::new(config.pages_dir.clone());

    let app_state = AppState {
        store: Arc::new(store),
        renderer: Arc::new(renderer),
    };

    // start router setup
    let app = features::wiki::wiki_router().with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context(format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
