pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{create_router, serve, serve_with_shutdown};
pub use config::toml_config::TomlConfig;
pub use core::diagram::DiagramService;
pub use domain::model::{DiagramResult, SaturationEstimate};
pub use utils::error::{DiagramError, Result};
