use anyhow::Context;
use contact_form::Config;
use contact_form_server::{app, spawn_sweeper, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::load_default().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    config.apply_env()?;

    tracing::info!(
        ttl_secs = config.forms.session_ttl_secs,
        max_forms = config.forms.max_forms,
        "contact-form starting"
    );

    let addr = config.bind_addr();
    let state = AppState::new(config);
    let _sweeper = spawn_sweeper(state.clone());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await.context("server failed")?;
    Ok(())
}
