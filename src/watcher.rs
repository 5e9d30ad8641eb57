use notify::{recommended_watcher, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info, warn};

use crate::error::Result;

/// Event emitted when the scripts list needs to be re-read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptsDirEvent {
    /// A new entry appeared
    Created(PathBuf),
    /// An entry's content or metadata (e.g. mode bits) changed
    Changed(PathBuf),
    /// An entry was removed
    Removed(PathBuf),
    /// Renames, rescans and anything without a single path
    FullReload,
}

impl ScriptsDirEvent {
    /// Map a raw notify event onto the coarse kinds above
    pub fn from_notify(event: &notify::Event) -> Self {
        let path = match event.paths.as_slice() {
            [single] => single.clone(),
            _ => return ScriptsDirEvent::FullReload,
        };

        match event.kind {
            EventKind::Create(_) => ScriptsDirEvent::Created(path),
            EventKind::Remove(_) => ScriptsDirEvent::Removed(path),
            EventKind::Modify(notify::event::ModifyKind::Name(_)) => ScriptsDirEvent::FullReload,
            EventKind::Modify(_) => ScriptsDirEvent::Changed(path),
            _ => ScriptsDirEvent::FullReload,
        }
    }
}

/// Watches the scripts directory (non-recursively) and forwards every change.
///
/// No debouncing: the receiver side re-reads the whole directory, so the
/// number of events only affects how often that happens.
pub struct ScriptsDirWatcher {
    tx: Option<Sender<ScriptsDirEvent>>,
    watcher: Option<RecommendedWatcher>,
    watched: Option<PathBuf>,
}

impl ScriptsDirWatcher {
    /// Create a new ScriptsDirWatcher
    ///
    /// Returns a tuple of (watcher, receiver) where receiver will emit
    /// ScriptsDirEvent for every change in the watched directory.
    pub fn new() -> (Self, Receiver<ScriptsDirEvent>) {
        let (tx, rx) = channel();
        let watcher = ScriptsDirWatcher {
            tx: Some(tx),
            watcher: None,
            watched: None,
        };
        (watcher, rx)
    }

    /// Start watching `dir`. The notify backend calls back on its own thread.
    pub fn start(&mut self, dir: &Path) -> Result<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| notify::Error::generic("watcher already started"))?;

        let mut watcher =
            recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) => {
                    let reload = ScriptsDirEvent::from_notify(&event);
                    debug!(kind = ?event.kind, event = ?reload, "Scripts directory changed");
                    // Receiver gone means the window closed
                    let _ = tx.send(reload);
                }
                Err(e) => {
                    warn!(error = %e, watcher = "scripts", "File watcher error");
                }
            })?;

        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        info!(path = %dir.display(), "Scripts watcher started");

        self.watcher = Some(watcher);
        self.watched = Some(dir.to_path_buf());
        Ok(())
    }

    /// Unsubscribe from change notifications. Dropping the sender closes the channel.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            if let Some(dir) = self.watched.take() {
                if let Err(e) = watcher.unwatch(&dir) {
                    debug!(error = %e, "Unwatch failed, dropping watcher anyway");
                }
            }
            info!(watcher = "scripts", "Scripts watcher stopped");
        }
    }
}

impl Drop for ScriptsDirWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, MetadataKind, ModifyKind, RemoveKind, RenameMode};
    use std::time::Duration;
    use tempfile::TempDir;

    fn event(kind: EventKind, paths: &[&str]) -> notify::Event {
        let mut event = notify::Event::new(kind);
        for path in paths {
            event = event.add_path(PathBuf::from(path));
        }
        event
    }

    #[test]
    fn test_classify_create_modify_remove() {
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(EventKind::Create(CreateKind::File), &["/s/a"])),
            ScriptsDirEvent::Created(PathBuf::from("/s/a"))
        );
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(
                EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
                &["/s/a"]
            )),
            ScriptsDirEvent::Changed(PathBuf::from("/s/a"))
        );
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(EventKind::Remove(RemoveKind::File), &["/s/a"])),
            ScriptsDirEvent::Removed(PathBuf::from("/s/a"))
        );
    }

    #[test]
    fn test_classify_rename_and_multi_path_as_full_reload() {
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(
                EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
                &["/s/a", "/s/b"]
            )),
            ScriptsDirEvent::FullReload
        );
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                &["/s/a"]
            )),
            ScriptsDirEvent::FullReload
        );
        assert_eq!(
            ScriptsDirEvent::from_notify(&event(EventKind::Any, &[])),
            ScriptsDirEvent::FullReload
        );
    }

    #[test]
    fn test_start_twice_fails() {
        let temp = TempDir::new().unwrap();
        let (mut watcher, _rx) = ScriptsDirWatcher::new();
        watcher.start(temp.path()).unwrap();
        assert!(watcher.watcher.is_some());
        assert!(watcher.start(temp.path()).is_err());
    }

    #[test]
    fn test_watcher_reports_new_file() {
        let temp = TempDir::new().unwrap();
        let (mut watcher, rx) = ScriptsDirWatcher::new();
        watcher.start(temp.path()).unwrap();

        std::fs::write(temp.path().join("new-script"), "#!/bin/sh\n").unwrap();

        let received = rx.recv_timeout(Duration::from_secs(5));
        assert!(received.is_ok(), "expected a change event");
    }

    #[test]
    fn test_stop_closes_channel() {
        let temp = TempDir::new().unwrap();
        let (mut watcher, rx) = ScriptsDirWatcher::new();
        watcher.start(temp.path()).unwrap();
        watcher.stop();
        assert!(watcher.watcher.is_none());

        // Sender lived in the dropped notify callback; unwatch may still flush
        // a final event before the channel closes
        loop {
            match rx.recv_timeout(Duration::from_secs(5)) {
                Ok(_) => continue,
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                    panic!("channel stayed open after stop")
                }
            }
        }
    }
}
