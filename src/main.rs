use bodyfat_service::utils::{logger, validation::Validate};
use bodyfat_service::CliArgs;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            if let Some(path) = &args.config {
                eprintln!("💡 Make sure '{}' exists and is valid TOML format", path);
            }
            std::process::exit(1);
        }
    };

    // logging needs the resolved config
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("🚀 Starting bodyfat-service");
    tracing::debug!("Server config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    bodyfat_service::serve(&config).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}
