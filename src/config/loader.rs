//! Configuration loading and saving
//!
//! Both files live in the directory returned by `setup::get_config_dir`.
//! Loading never fails: a missing or broken file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::defaults::{CONFIG_FILE_NAME, EDITOR_PATH_FILE_NAME};
use super::types::Config;
use crate::error::{ManagerError, Result};
use crate::setup::{ensure_parent_dir, get_config_dir};

/// Load configuration from ~/.config/nautilus-scripts-manager/config.json
pub fn load_config() -> Config {
    load_config_from(&get_config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from an explicit path.
///
/// Returns Config::default() if the file is missing or cannot be parsed.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn load_config_from(path: &Path) -> Config {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("Config file not found, using defaults");
            return Config::default();
        }
        Err(e) => {
            warn!(error = %e, "Failed to read config file, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&contents) {
        Ok(config) => {
            info!("Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to parse config JSON, using defaults");
            Config::default()
        }
    }
}

/// Read the saved editor executable from ~/.config/nautilus-scripts-manager/editor_path
pub fn load_editor_path() -> Option<PathBuf> {
    load_editor_path_from(&get_config_dir().join(EDITOR_PATH_FILE_NAME))
}

/// Read the saved editor executable from an explicit file.
///
/// The first non-empty line is used, trimmed and tilde-expanded.
pub fn load_editor_path_from(file: &Path) -> Option<PathBuf> {
    let contents = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, path = %file.display(), "Failed to read editor path file");
            }
            return None;
        }
    };

    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| PathBuf::from(shellexpand::tilde(line).as_ref()))
}

/// Persist the chosen editor executable
pub fn save_editor_path(editor: &Path) -> Result<()> {
    save_editor_path_to(&get_config_dir().join(EDITOR_PATH_FILE_NAME), editor)
}

/// Persist the chosen editor executable to an explicit file
pub fn save_editor_path_to(file: &Path, editor: &Path) -> Result<()> {
    let to_error = |source| ManagerError::ConfigWrite {
        path: file.to_path_buf(),
        source,
    };

    ensure_parent_dir(file).map_err(to_error)?;
    fs::write(file, format!("{}\n", editor.display())).map_err(to_error)?;

    info!(path = %file.display(), editor = %editor.display(), "Saved editor path");
    Ok(())
}
