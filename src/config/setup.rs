//! Interactive setup wizard for first-time configuration
//!
//! Asks where the library should be stored and which backend to use, then
//! writes the configuration file.

use super::PhotosConfig;
use crate::db::Backend;
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for data location and backend
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<PhotosConfig, ConfigError> {
    println!("Welcome to photos! Let's set up your library.\n");

    let defaults = PhotosConfig::default();
    let theme = ColorfulTheme::default();

    let data_dir: String = Input::with_theme(&theme)
        .with_prompt("Library location")
        .default(defaults.data_dir.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let backends = [Backend::Sled, Backend::Json];
    let choice = Select::with_theme(&theme)
        .with_prompt("Storage backend")
        .items(&["sled (embedded database)", "json (single file)"])
        .default(0)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let stock_dir: String = Input::with_theme(&theme)
        .with_prompt("Stock photos folder")
        .default(defaults.stock_dir.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = PhotosConfig {
        data_dir: PathBuf::from(data_dir),
        backend: backends[choice],
        stock_dir: PathBuf::from(stock_dir),
        quiet: false,
    };
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
