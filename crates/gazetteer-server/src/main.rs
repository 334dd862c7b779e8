use clap::Parser;
use gazetteer_server::{config::ServerConfig, startup::Application, telemetry::init_tracing};
use tracing::info;

/// Entry point for the gazetteer HTTP service.
///
/// Loads the dataset once, then serves it until interrupted.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info")?;

    let config = ServerConfig::parse();
    info!(data = %config.data_path().display(), "starting gazetteer server");

    let application = Application::build(&config)?;
    application.run_until_stopped().await?;

    Ok(())
}
