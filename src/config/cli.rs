use super::{DEFAULT_HOST, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "phase-diagram")]
#[command(about = "HTTP service estimating saturated liquid/vapor specific volumes")]
pub struct CliConfig {
    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_host("host", ConfigProvider::host(self))?;
        validation::validate_range("port", ConfigProvider::port(self), 1, u16::MAX)?;
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }
        Ok(())
    }
}
