use anyhow::Result;
use boolean_portal::config::{self, Config};
use boolean_portal::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
