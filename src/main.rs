use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use task_lifecycle::api;
use task_lifecycle::config::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "task_lifecycle=info".into()),
        )
        .init();

    let settings = Settings::from_env()?;
    info!(
        "Starting status registry on {}:{} with {} transitions",
        settings.host, settings.port, settings.table
    );

    let registry = Arc::new(settings.build_registry()?);
    let api = api::setup(&settings.host, settings.port, registry);
    api.start().await?;

    Ok(())
}
