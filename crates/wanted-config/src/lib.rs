pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, ConnectionConfig, default_port, API_KEY_PLACEHOLDER};
pub use paths::{PathManager, container_base_path};
