use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// verbose 模式下開啟 debug 等級
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        "phase_diagram=debug,tower_http=debug,info".to_string()
    } else {
        "phase_diagram=info,tower_http=info".to_string()
    }
}

/// 以指定等級產生過濾條件 (來自 TOML 的 logging.level)
pub fn level_filter(level: &str) -> String {
    format!("phase_diagram={level},tower_http={level},info")
}

pub fn init_logger(filter: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(), // 方便送進集中式日誌
            )
            .init(),
    }
}

pub fn init_cli_logger(verbose: bool, format: LogFormat) {
    init_logger(&default_filter(verbose), format);
}
