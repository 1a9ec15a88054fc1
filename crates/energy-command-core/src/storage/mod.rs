mod config;

pub use config::{Config, DisplayConfig, LoggingConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/energy-command[-dev]/` based on ENERGY_COMMAND_ENV.
///
/// Set ENERGY_COMMAND_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ENERGY_COMMAND_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("energy-command-dev")
    } else {
        base_dir.join("energy-command")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
