use std::process::ExitCode;

use aavescan::bootstrap::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the rendered dashboard, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Dashboard error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
