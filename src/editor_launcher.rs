//! Finding and starting the external code editor
//!
//! Resolution order: saved editor path, then the candidate list (absolute
//! paths or names on PATH). When nothing resolves the UI asks the user to pick
//! an executable, which is then saved for next time.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{ManagerError, Result};

/// Where a resolved editor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSource {
    /// The one-line editor_path file
    Saved,
    /// An entry of the candidate list
    Candidate,
    /// Chosen in the file picker just now
    Picked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEditor {
    pub path: PathBuf,
    pub source: EditorSource,
}

/// True for regular files with any executable bit set
pub fn is_executable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Resolve a single candidate entry. Entries containing '/' are treated as
/// paths (tilde expanded), anything else is searched on PATH.
pub fn resolve_candidate(candidate: &str) -> Option<PathBuf> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    if candidate.contains('/') {
        let path = PathBuf::from(shellexpand::tilde(candidate).as_ref());
        return is_executable_file(&path).then_some(path);
    }

    which::which(candidate).ok()
}

/// Pick the editor to launch without any user interaction.
///
/// A saved path that no longer points at an executable is skipped with a
/// warning rather than treated as an error.
pub fn resolve_editor(saved: Option<&Path>, candidates: &[String]) -> Option<ResolvedEditor> {
    if let Some(saved) = saved {
        if is_executable_file(saved) {
            debug!(editor = %saved.display(), "Using saved editor path");
            return Some(ResolvedEditor {
                path: saved.to_path_buf(),
                source: EditorSource::Saved,
            });
        }
        warn!(editor = %saved.display(), "Saved editor path is not executable, ignoring");
    }

    candidates.iter().find_map(|candidate| {
        resolve_candidate(candidate).map(|path| {
            debug!(candidate = %candidate, editor = %path.display(), "Using editor candidate");
            ResolvedEditor {
                path,
                source: EditorSource::Candidate,
            }
        })
    })
}

/// Start `editor` with `dir` as its only argument, detached from this process.
///
/// The child gets its own process group and no inherited stdio, so closing the
/// manager window does not take the editor down. A background thread reaps it.
pub fn launch_editor(editor: &Path, dir: &Path) -> Result<u32> {
    let mut child = Command::new(editor)
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .map_err(|source| ManagerError::EditorSpawn {
            editor: editor.to_path_buf(),
            source,
        })?;

    let pid = child.id();
    info!(editor = %editor.display(), dir = %dir.display(), pid, "Launched editor");

    // Most editors fork and exit right away; reap so no zombie lingers
    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!(pid, %status, "Editor launcher process exited"),
        Err(e) => warn!(pid, error = %e, "Failed waiting for editor process"),
    });

    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_is_executable_file() {
        let temp = TempDir::new().unwrap();
        assert!(is_executable_file(&make_file(temp.path(), "exec", 0o755)));
        assert!(!is_executable_file(&make_file(temp.path(), "plain", 0o644)));
        assert!(!is_executable_file(temp.path()));
        assert!(!is_executable_file(&temp.path().join("missing")));
    }

    #[test]
    fn test_saved_path_wins() {
        let temp = TempDir::new().unwrap();
        let saved = make_file(temp.path(), "my-editor", 0o755);
        let other = make_file(temp.path(), "other-editor", 0o755);

        let resolved = resolve_editor(
            Some(&saved),
            &[other.to_string_lossy().into_owned()],
        )
        .unwrap();
        assert_eq!(resolved.path, saved);
        assert_eq!(resolved.source, EditorSource::Saved);
    }

    #[test]
    fn test_stale_saved_path_falls_back_to_candidates() {
        let temp = TempDir::new().unwrap();
        let candidate = make_file(temp.path(), "code", 0o755);

        let resolved = resolve_editor(
            Some(&temp.path().join("uninstalled")),
            &[
                temp.path().join("missing").to_string_lossy().into_owned(),
                make_file(temp.path(), "not-exec", 0o644)
                    .to_string_lossy()
                    .into_owned(),
                candidate.to_string_lossy().into_owned(),
            ],
        )
        .unwrap();
        assert_eq!(resolved.path, candidate);
        assert_eq!(resolved.source, EditorSource::Candidate);
    }

    #[test]
    fn test_nothing_resolves() {
        let temp = TempDir::new().unwrap();
        let candidates = vec![
            temp.path().join("nope").to_string_lossy().into_owned(),
            "definitely-not-an-installed-editor-xyz".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(resolve_editor(None, &candidates), None);
    }

    #[test]
    fn test_bare_name_searches_path() {
        // `sh` is present on every unix PATH
        let resolved = resolve_candidate("sh").unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_launch_editor_passes_directory() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("opened");
        let editor = temp.path().join("fake-editor");
        fs::write(
            &editor,
            format!("#!/bin/sh\necho \"$1\" > '{}'\n", marker.display()),
        )
        .unwrap();
        fs::set_permissions(&editor, fs::Permissions::from_mode(0o755)).unwrap();

        let scripts_dir = temp.path().join("scripts");
        fs::create_dir(&scripts_dir).unwrap();

        launch_editor(&editor, &scripts_dir).unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut written = String::new();
        while written.is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(20));
            written = fs::read_to_string(&marker).unwrap_or_default();
        }
        assert_eq!(written.trim(), scripts_dir.to_string_lossy());
    }

    #[test]
    fn test_launch_missing_editor_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let err = launch_editor(&temp.path().join("no-editor"), temp.path()).unwrap_err();
        assert!(matches!(err, ManagerError::EditorSpawn { .. }));
    }
}
