use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vanscraper::config::Settings;

fn main() -> Result<()> {
    // Initialize logging; Settings::new handles the .env file
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "vanscraper=info".into()),
        )
        .with(fmt::layer())
        .init();

    let settings = Settings::new().context("Failed to load configuration")?;
    tracing::info!(
        api_url = %settings.api_url,
        include_distance = settings.include_distance,
        output = %settings.output_path.display(),
        "Starting van listing export"
    );

    let summary = vanscraper::run(&settings)?;

    tracing::info!(
        fetched = summary.fetched,
        kept = summary.kept,
        rows = summary.rows_written,
        "Export complete"
    );
    Ok(())
}
