use anyhow::Context;
use clap::Parser;
use country_picker::args::{load_config, Args};
use country_picker::logging::init_tracing;
use country_picker::lookup::{CountryLookup, RestCountriesClient};
use country_picker::ui;
use std::sync::Arc;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let log_path = config.log_path();
    init_tracing(&config.logging, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(
        base_url = %config.api.base_url,
        mode = ?config.details.mode,
        country = %config.details.default_country,
        stale_after_seconds = config.cache.stale_after_seconds,
        "Starting country-picker v{}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("lookup")
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = RestCountriesClient::from_config(&config.api)
        .context("Failed to build HTTP client")?;
    let lookup: Arc<dyn CountryLookup> = Arc::new(client);

    let result = ui::runtime::run(&config, lookup, runtime.handle());
    runtime.shutdown_timeout(Duration::from_secs(1));
    result.context("Terminal UI failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}
