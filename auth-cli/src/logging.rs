use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LEVEL: &str = "warn";

/// `RUST_LOG` важнее `LOG_LEVEL`; без обоих пишем только предупреждения.
pub(crate) fn init_logging() -> Result<()> {
    let fallback = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
