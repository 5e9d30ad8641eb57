//! Core script types

use std::path::PathBuf;

/// What kind of filesystem object a listed entry is (symlinks followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    /// Nautilus renders subdirectories as submenus
    Directory,
    /// Sockets, fifos, dangling symlinks
    Other,
}

/// One row of the scripts list, read fresh from disk on every refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// File name as displayed (lossy UTF-8)
    pub name: String,
    pub path: PathBuf,
    /// Whether the owner-executable bit (0o100) is set
    pub is_executable: bool,
    pub kind: EntryKind,
}

impl ScriptEntry {
    /// Only regular files get their checkbox wired to chmod.
    /// Clearing x on a directory would make the submenu untraversable.
    pub fn is_toggleable(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// The chmod a click on this row performs, bound to the path rather than
    /// the row position so a refresh in between cannot retarget it
    pub fn toggle_request(&self) -> Option<ToggleRequest> {
        self.is_toggleable().then(|| ToggleRequest {
            path: self.path.clone(),
            enable: !self.is_executable,
        })
    }
}

/// A pending executable-bit change for one script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub path: PathBuf,
    /// true sets the owner bit, false clears every exec bit
    pub enable: bool,
}
