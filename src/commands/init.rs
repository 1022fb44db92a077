use crate::config::{Config, Locale, CONFIG_FILE_NAME};
use crate::error::{Result, SqlMakerError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Handle the init command, writing `sqlmaker.toml` into `dir`
///
/// Returns the path of the written file.
#[allow(clippy::disallowed_methods)]
pub fn handle_init(dir: &Path, locale: Locale, force: bool) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(SqlMakerError::ConfigCreationFailed {
            message: format!("Directory does not exist: {}", dir.display()),
        });
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        return Err(SqlMakerError::ConfigCreationFailed {
            message: format!(
                "{} already exists. Use --force to overwrite it.",
                config_path.display()
            ),
        });
    }

    let config_content = toml::to_string_pretty(&Config::new(locale))?;
    fs::write(&config_path, config_content)?;
    info!("Wrote configuration to {}", config_path.display());

    println!("Successfully initialized sqlmaker configuration");
    println!("Configuration saved to: {}", config_path.display());

    Ok(config_path)
}
