//! Binary crate for the weather dashboard backend.
//!
//! This crate focuses on:
//! - The two JSON endpoints (`/api/weather`, `/api/llm`)
//! - Request validation and the uniform `{ "error": ... }` failure body
//! - Diagnostic logging (the core itself never logs)

use tracing_subscriber::EnvFilter;
use weather_core::Config;

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = routes::router(Config::from_env());

    let port: u16 = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Weather dashboard backend listening on http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
