// Configuration management module
// TOML settings for the linking engine and their console rendering

pub mod display;
pub mod settings;

pub use display::{init_config, show_config};
pub use settings::{Config, ConfigError, LinkingConfig};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::config_dir()
}
