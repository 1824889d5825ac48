use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bind address when `NONGLI_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nongli=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = std::env::var("NONGLI_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("农历生日转换器已启动，监听 {addr}");

    axum::serve(listener, nongli::server::router())
        .await
        .context("server error")?;
    Ok(())
}
