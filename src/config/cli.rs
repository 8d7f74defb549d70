use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bodyfat-service")]
#[command(about = "HTTP service that records body measurements and returns a placeholder estimate")]
pub struct CliArgs {
    /// Address to bind [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// CSV file accepted records are appended to [default: bodyfat-Copy1.csv]
    #[arg(long)]
    pub csv_path: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliArgs {
    /// Resolves settings: defaults, then the TOML file, then flags given on
    /// the command line.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_server_config(),
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(csv_path) = &self.csv_path {
            config.csv_path = csv_path.clone();
        }
        config.verbose |= self.verbose;
        config.json_logs |= self.json_logs;

        Ok(config)
    }
}
