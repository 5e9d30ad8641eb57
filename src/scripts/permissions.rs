//! Executable-bit handling

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::info;

use super::types::ToggleRequest;
use crate::error::{ManagerError, Result};

const USER_EXEC: u32 = 0o100;
const ALL_EXEC: u32 = 0o111;

pub fn is_user_executable(mode: u32) -> bool {
    mode & USER_EXEC != 0
}

/// Mode after toggling: enabling adds the owner bit only, disabling clears
/// owner, group and other bits. Non-executable bits are untouched.
pub fn toggled_mode(mode: u32, enable: bool) -> u32 {
    if enable {
        mode | USER_EXEC
    } else {
        mode & !ALL_EXEC
    }
}

/// Set or clear the executable bits of a script
pub fn set_executable(path: &Path, enable: bool) -> Result<()> {
    let to_error = |source| ManagerError::Permission {
        path: path.to_path_buf(),
        source,
    };

    let mode = fs::metadata(path).map_err(to_error)?.permissions().mode();
    let new_mode = toggled_mode(mode, enable);

    if new_mode != mode {
        fs::set_permissions(path, fs::Permissions::from_mode(new_mode)).map_err(to_error)?;
    }

    info!(
        path = %path.display(),
        enable,
        old_mode = %format!("{:o}", mode & 0o7777),
        new_mode = %format!("{:o}", new_mode & 0o7777),
        "Toggled script executable bit"
    );
    Ok(())
}

impl ToggleRequest {
    pub fn apply(&self) -> Result<()> {
        set_executable(&self.path, self.enable)
    }
}
