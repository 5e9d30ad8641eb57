//! Default configuration values

/// Name of the optional JSON settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Name of the one-line file holding the chosen editor executable
pub const EDITOR_PATH_FILE_NAME: &str = "editor_path";

/// Editors tried when no editor path has been saved.
/// Entries containing '/' are absolute paths, bare names are looked up on PATH.
pub const DEFAULT_EDITOR_CANDIDATES: &[&str] = &[
    "/usr/bin/code-insiders",
    "/usr/bin/code",
    "/snap/bin/code",
    "/usr/bin/codium",
    "code-insiders",
    "code",
    "codium",
];
