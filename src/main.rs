use clap::Parser;
use phase_diagram::utils::logger::{self, LogFormat};
use phase_diagram::utils::validation::Validate;
use phase_diagram::{CliConfig, DiagramError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => {
            // 載入 TOML 配置，命令列參數優先
            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            config.apply_overrides(cli.host.clone(), cli.port);

            let format = if cli.json_logs {
                LogFormat::Json
            } else {
                config.log_format()
            };
            let filter = match (cli.verbose, config.log_level()) {
                (false, Some(level)) => logger::level_filter(&level),
                (verbose, _) => logger::default_filter(verbose),
            };
            logger::init_logger(&filter, format);

            tracing::info!("📁 Loaded configuration from: {}", path);
            exit_on_invalid(&config);
            run(phase_diagram::serve(&config).await)
        }
        None => {
            logger::init_cli_logger(cli.verbose, LogFormat::from_json_flag(cli.json_logs));
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }

            exit_on_invalid(&cli);
            run(phase_diagram::serve(&cli).await)
        }
    }
}

fn exit_on_invalid<V: Validate>(config: &V) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(result: Result<(), DiagramError>) -> anyhow::Result<()> {
    if let Err(e) = &result {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    }
    result.map_err(anyhow::Error::from)
}
