use dotenvy::dotenv;
use tracing::info;

use crate::{render, Dashboard, DashboardConfig, OutputFormat};

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = DashboardConfig::from_env()?;
    info!(
        lending = %config.lending_endpoint,
        governance = %config.governance_endpoint,
        timeout = ?config.request_timeout,
        "Loading dashboard"
    );

    let dashboard = Dashboard::http(&config)?;
    let snapshot = dashboard.load().await;

    let output = match config.output {
        OutputFormat::Text => render::text(&snapshot),
        OutputFormat::Json => render::json(&snapshot)?,
    };
    println!("{output}");

    Ok(())
}
