//! Ask the Portkey gateway one fixed question and print the answer.

use anyhow::{Context, Result};
use portkey_chat::{dispatcher, GatewayConfig, ProviderFactory};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = GatewayConfig::from_env().context("failed to load gateway configuration")?;
    let provider = ProviderFactory::create(&config).context("failed to build gateway client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatcher::run(&*provider, &mut out)
        .await
        .context("chat completion failed")?;

    Ok(())
}

/// Initialize tracing on stderr; stdout carries only the answer.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
