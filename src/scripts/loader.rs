//! Script loading from the file system

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::{debug, instrument, warn};

use super::permissions::is_user_executable;
use super::types::{EntryKind, ScriptEntry};
use crate::error::{ManagerError, Result};
use crate::setup::ensure_scripts_dir;

/// Reads every entry of the scripts directory, creating the directory first if
/// it is missing. Entries are sorted lexicographically by name.
///
/// Entries whose metadata cannot be read (e.g. a dangling symlink) are still
/// listed as `EntryKind::Other` and reported as not executable.
#[instrument(level = "debug", skip_all, fields(dir = %scripts_dir.display()))]
pub fn read_scripts(scripts_dir: &Path) -> Result<Vec<ScriptEntry>> {
    ensure_scripts_dir(scripts_dir)?;

    let to_error = |source| ManagerError::ScriptsDir {
        path: scripts_dir.to_path_buf(),
        source,
    };

    let mut scripts = Vec::new();
    for entry in fs::read_dir(scripts_dir).map_err(to_error)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        // fs::metadata follows symlinks, matching what chmod will touch
        let (is_executable, kind) = match fs::metadata(&path) {
            Ok(metadata) => {
                let kind = if metadata.is_file() {
                    EntryKind::File
                } else if metadata.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::Other
                };
                (is_user_executable(metadata.permissions().mode()), kind)
            }
            Err(e) => {
                debug!(error = %e, path = %path.display(), "Entry has no readable metadata");
                (false, EntryKind::Other)
            }
        };

        scripts.push(ScriptEntry {
            name,
            path,
            is_executable,
            kind,
        });
    }

    scripts.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = scripts.len(), "Loaded scripts");
    Ok(scripts)
}
