//! Filesystem locations used by the manager
//!
//! Resolves the Nautilus scripts directory and the manager's own config
//! directory, honouring environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ManagerError, Result};

/// Directory name used under the XDG config/state dirs
pub const APP_DIR_NAME: &str = "nautilus-scripts-manager";

/// Environment variable overriding the scripts directory
pub const SCRIPTS_DIR_ENV: &str = "NSM_SCRIPTS_DIR";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "NSM_CONFIG_DIR";

/// Get the scripts directory
///
/// Priority:
/// 1. NSM_SCRIPTS_DIR environment variable (if set)
/// 2. `scriptsDir` from config.json
/// 3. ~/.local/share/nautilus/scripts (default)
/// 4. Temp directory fallback (if no data dir could be resolved)
pub fn get_scripts_dir(config: &Config) -> PathBuf {
    if let Ok(dir) = std::env::var(SCRIPTS_DIR_ENV) {
        return PathBuf::from(shellexpand::tilde(&dir).as_ref());
    }

    if let Some(dir) = config.scripts_dir.as_deref() {
        return PathBuf::from(shellexpand::tilde(dir).as_ref());
    }

    default_scripts_dir()
}

fn default_scripts_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(data) => data.join("nautilus").join("scripts"),
        None => std::env::temp_dir().join("nautilus-scripts"),
    }
}

/// Get the manager's config directory (`~/.config/nautilus-scripts-manager`)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(shellexpand::tilde(&dir).as_ref());
    }

    match dirs::config_dir() {
        Some(config) => config.join(APP_DIR_NAME),
        None => std::env::temp_dir().join(APP_DIR_NAME),
    }
}

/// Create the scripts directory (and parents) if it does not exist yet
pub fn ensure_scripts_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ManagerError::ScriptsDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(path = %dir.display(), "Created scripts directory");
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            debug!(path = %parent.display(), "Created directory");
        }
    }
    Ok(())
}
