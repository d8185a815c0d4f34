mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{
    DEFAULT_CONFIG_PATHS, load_config, load_config_file, parse_config, resolve_config_path,
};
pub use types::{AnalyzerConfig, PartialConfig};
