use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,  // recoverable, logged
    Error,    // operation failed, shown in a dialog
    Critical, // the window cannot do its job
}

/// Domain-specific errors for the scripts manager
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Scripts directory '{}' is not accessible: {source}", path.display())]
    ScriptsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to change permissions of '{}': {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No code editor found")]
    EditorNotFound,

    #[error("'{}' is not an executable file", editor.display())]
    EditorNotExecutable { editor: PathBuf },

    #[error("Failed to launch editor '{}': {source}", editor.display())]
    EditorSpawn {
        editor: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write configuration '{}': {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl ManagerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ScriptsDir { .. } => ErrorSeverity::Critical,
            Self::Permission { .. } => ErrorSeverity::Error,
            Self::EditorNotFound => ErrorSeverity::Error,
            Self::EditorNotExecutable { .. } => ErrorSeverity::Error,
            Self::EditorSpawn { .. } => ErrorSeverity::Error,
            Self::ConfigWrite { .. } => ErrorSeverity::Warning,
            Self::Watch(_) => ErrorSeverity::Warning,
        }
    }

    /// Text shown in the blocking error dialog
    pub fn user_message(&self) -> String {
        match self {
            Self::ScriptsDir { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            Self::Permission { path, source } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Could not change permissions of '{}': {}", name, source)
            }
            Self::EditorNotFound => {
                "No code editor was found. Install VS Code or pick an editor executable."
                    .to_string()
            }
            Self::EditorNotExecutable { editor } => {
                format!("{} is not an executable program.", editor.display())
            }
            Self::EditorSpawn { editor, source } => {
                format!("Could not start {}: {}", editor.display(), source)
            }
            Self::ConfigWrite { path, source } => {
                format!("Could not save {}: {}", path.display(), source)
            }
            Self::Watch(e) => format!("Live updates are unavailable: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ManagerError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_permission_message_uses_file_name() {
        let err = ManagerError::Permission {
            path: PathBuf::from("/home/user/scripts/Open Terminal"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = err.user_message();
        assert!(msg.contains("'Open Terminal'"));
        assert!(!msg.contains("/home/user"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_editor_not_found_is_an_error() {
        let err = ManagerError::EditorNotFound;
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.to_string(), "No code editor found");
    }

    #[test]
    fn test_log_err_returns_none_on_error() {
        let result: std::result::Result<u32, &str> = Err("boom");
        assert_eq!(result.log_err(), None);

        let result: std::result::Result<u32, &str> = Ok(7);
        assert_eq!(result.warn_on_err(), Some(7));
    }
}
