use anyhow::Context;
use libpagecheck::{config, runner, telemetry};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = telemetry::get_subscriber("pagecheck".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let config = config::settings().context("Failed to read configuration")?;
    let report = runner::run(&config).await?;

    report
        .ensure_success()
        .with_context(|| format!("Page at {} is not working", config.target.base_url))
}
