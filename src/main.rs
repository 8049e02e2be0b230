use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hoststat::config::AppConfig;
use hoststat::source::Collaborators;
use hoststat::{Host, Platform, Provider};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the JSON snapshot
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = AppConfig::load()?;
    let sampling = &app_config.sampling;
    let platform = match sampling.platform {
        Some(p) => p,
        None => Platform::detect()?,
    };
    tracing::info!(
        %platform,
        version = env!("CARGO_PKG_VERSION"),
        metrics = sampling.metrics.len(),
        "Taking snapshot"
    );

    let collaborators =
        Collaborators::system_with_timeout(Duration::from_millis(sampling.command_timeout_ms));
    let provider = Provider::new(platform, collaborators).with_path(sampling.path.trim());
    let host = Arc::new(Host::new(provider));

    let snapshot = host
        .snapshot_blocking(
            sampling.metrics.clone(),
            Duration::from_millis(sampling.snapshot_timeout_ms),
        )
        .await?;
    if !snapshot.is_complete() {
        tracing::info!(failed = snapshot.errors.len(), "Snapshot is partial");
    }

    let json = if app_config.output.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}
