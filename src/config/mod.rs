//! Configuration module - persisted user settings
//!
//! This module provides functionality for:
//! - Loading optional settings from ~/.config/nautilus-scripts-manager/config.json
//! - Reading and writing the one-line `editor_path` file
//! - Default values (editor candidates)
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and saving

mod defaults;
mod loader;
mod types;

pub use defaults::{CONFIG_FILE_NAME, DEFAULT_EDITOR_CANDIDATES, EDITOR_PATH_FILE_NAME};

pub use types::Config;

pub use loader::{
    load_config, load_config_from, load_editor_path, load_editor_path_from, save_editor_path,
    save_editor_path_to,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
