//! The manager window: a checkbox per script plus two command buttons

use std::path::{Path, PathBuf};

use gpui::{
    div, prelude::*, px, rgb, uniform_list, AnyElement, App, ClickEvent, Context, FocusHandle,
    Focusable, PathPromptOptions, PromptLevel, Render, UniformListScrollHandle, Window,
};
use tracing::{error, info, warn};

use crate::components::{Button, ButtonColors, ButtonVariant};
use crate::config::{self, Config};
use crate::editor_launcher::{self, EditorSource, ResolvedEditor};
use crate::error::{ErrorSeverity, ManagerError, Result, ResultExt};
use crate::list_item::{ListItemColors, ScriptListItem};
use crate::scripts::{self, EntryKind, ScriptEntry, ToggleRequest};

pub const WINDOW_TITLE: &str = "Nautilus Scripts Manager";

/// What caused a re-read; decides whether a failure gets a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// The Refresh button
    User,
    /// The directory watcher, or the follow-up read after a toggle
    Watcher,
}

impl RefreshTrigger {
    /// Watcher refreshes only report the first failure after a good read so
    /// a broken directory does not stack dialogs on every event
    pub fn reports_error(self, was_failing: bool) -> bool {
        match self {
            RefreshTrigger::User => true,
            RefreshTrigger::Watcher => !was_failing,
        }
    }
}

/// The entries currently shown, or the reason none can be shown
#[derive(Debug, Default)]
struct ScriptsListing {
    entries: Vec<ScriptEntry>,
    load_error: Option<String>,
}

impl ScriptsListing {
    fn is_failing(&self) -> bool {
        self.load_error.is_some()
    }

    fn reload(&mut self, scripts_dir: &Path) -> Result<()> {
        match scripts::read_scripts(scripts_dir) {
            Ok(entries) => {
                self.entries = entries;
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                self.entries.clear();
                self.load_error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

/// Window state. Entries are re-read from disk on every refresh.
pub struct ScriptsManagerView {
    scripts_dir: PathBuf,
    config: Config,
    listing: ScriptsListing,
    /// Failure from the first read, shown once the window exists
    startup_error: Option<ManagerError>,
    /// Set while the editor file picker is open
    picking_editor: bool,
    focus_handle: FocusHandle,
    list_scroll_handle: UniformListScrollHandle,
}

impl ScriptsManagerView {
    pub fn new(scripts_dir: PathBuf, config: Config, cx: &mut Context<Self>) -> Self {
        let mut listing = ScriptsListing::default();
        let startup_error = listing.reload(&scripts_dir).err();
        if let Some(e) = &startup_error {
            error!(error = %e, "Failed to list scripts directory at startup");
        }

        Self {
            scripts_dir,
            config,
            listing,
            startup_error,
            picking_editor: false,
            focus_handle: cx.focus_handle(),
            list_scroll_handle: UniformListScrollHandle::new(),
        }
    }

    /// Show the dialog for a failed first read, if any
    pub fn report_startup_error(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(e) = self.startup_error.take() {
            self.show_error(&e, window, cx);
        }
    }

    /// Re-read the whole directory and re-render
    pub fn refresh_scripts(
        &mut self,
        trigger: RefreshTrigger,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let was_failing = self.listing.is_failing();
        if let Err(e) = self.listing.reload(&self.scripts_dir) {
            error!(error = %e, trigger = ?trigger, "Failed to list scripts directory");
            if trigger.reports_error(was_failing) {
                self.show_error(&e, window, cx);
            }
        }
        cx.notify();
    }

    fn toggle_entry(&mut self, request: &ToggleRequest, window: &mut Window, cx: &mut Context<Self>) {
        if let Err(e) = request.apply() {
            self.show_error(&e, window, cx);
        }

        // The watcher will refresh too; doing it now keeps the checkbox honest
        // when the chmod failed
        self.refresh_scripts(RefreshTrigger::Watcher, window, cx);
    }

    fn open_editor(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.picking_editor {
            return;
        }

        let saved = config::load_editor_path();
        let candidates = self.config.get_editor_candidates();

        match editor_launcher::resolve_editor(saved.as_deref(), &candidates) {
            Some(editor) => self.launch(&editor, window, cx),
            None => self.pick_editor(window, cx),
        }
    }

    /// Ask the user for an editor executable via the platform file picker
    fn pick_editor(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        info!("No editor resolved, asking user to pick one");
        self.picking_editor = true;

        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: Some("Use as Editor".into()),
        });

        cx.spawn_in(window, async move |this, cx| {
            let picked = match paths.await {
                Ok(Ok(Some(paths))) => paths.into_iter().next(),
                Ok(Ok(None)) => None,
                Ok(Err(e)) => {
                    warn!(error = %e, "Editor picker failed");
                    None
                }
                Err(_) => None,
            };

            this.update_in(cx, |view, window, cx| {
                view.picking_editor = false;
                view.finish_pick(picked, window, cx);
            })
            .log_err();
        })
        .detach();
    }

    fn finish_pick(&mut self, picked: Option<PathBuf>, window: &mut Window, cx: &mut Context<Self>) {
        let Some(path) = picked else {
            self.show_error(&ManagerError::EditorNotFound, window, cx);
            return;
        };

        if !editor_launcher::is_executable_file(&path) {
            self.show_error(&ManagerError::EditorNotExecutable { editor: path }, window, cx);
            return;
        }

        config::save_editor_path(&path).warn_on_err();

        let editor = ResolvedEditor {
            path,
            source: EditorSource::Picked,
        };
        self.launch(&editor, window, cx);
    }

    fn launch(&mut self, editor: &ResolvedEditor, window: &mut Window, cx: &mut Context<Self>) {
        info!(
            editor = %editor.path.display(),
            source = ?editor.source,
            dir = %self.scripts_dir.display(),
            "Opening scripts directory in editor"
        );
        if let Err(e) = editor_launcher::launch_editor(&editor.path, &self.scripts_dir) {
            self.show_error(&e, window, cx);
        }
    }

    /// Blocking error dialog; no retries
    fn show_error(&self, err: &ManagerError, window: &mut Window, cx: &mut Context<Self>) {
        error!(error = %err, severity = ?err.severity(), "Showing error dialog");

        let level = match err.severity() {
            ErrorSeverity::Warning => PromptLevel::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => PromptLevel::Critical,
        };
        let detail = err.user_message();
        let answer = window.prompt(level, "Error", Some(detail.as_str()), &["OK"], cx);

        cx.spawn(async move |_this, _cx| {
            answer.await.ok();
        })
        .detach();
    }

    fn render_list(&self, colors: ListItemColors, cx: &mut Context<Self>) -> AnyElement {
        if let Some(message) = &self.listing.load_error {
            return div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(rgb(colors.text_muted))
                .child(message.clone())
                .into_any_element();
        }

        if self.listing.entries.is_empty() {
            return div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(rgb(colors.text_muted))
                .child("No scripts yet. Use the editor button to create one.")
                .into_any_element();
        }

        let entity = cx.entity();
        let entries = self.listing.entries.clone();

        uniform_list("scripts-list", entries.len(), move |visible_range, _window, _cx| {
            visible_range
                .filter_map(|ix| {
                    let entry = entries.get(ix)?;
                    let entity = entity.clone();

                    let mut item = ScriptListItem::new(ix, entry.name.clone(), colors)
                        .checked(entry.is_executable)
                        .enabled(entry.is_toggleable());
                    if let Some(request) = entry.toggle_request() {
                        item = item.on_toggle(Box::new(move |_event, window, cx| {
                            entity.update(cx, |view, cx| view.toggle_entry(&request, window, cx));
                        }));
                    }
                    if entry.kind == EntryKind::Directory {
                        item = item.tag("folder");
                    }
                    Some(item)
                })
                .collect::<Vec<_>>()
        })
        .size_full()
        .track_scroll(self.list_scroll_handle.clone())
        .into_any_element()
    }
}

impl Focusable for ScriptsManagerView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ScriptsManagerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ListItemColors::default();
        let button_colors = ButtonColors::default();
        let entries = &self.listing.entries;
        let executable_count = entries.iter().filter(|e| e.is_executable).count();
        let entry_count = entries.len();

        let open_editor = cx.listener(|this, _event: &ClickEvent, window, cx| {
            this.open_editor(window, cx);
        });
        let refresh = cx.listener(|this, _event: &ClickEvent, window, cx| {
            info!("Manual refresh requested");
            this.refresh_scripts(RefreshTrigger::User, window, cx);
        });

        div()
            .track_focus(&self.focus_handle)
            .flex()
            .flex_col()
            .size_full()
            .p(px(12.))
            .gap(px(8.))
            .bg(rgb(colors.background))
            .text_color(rgb(colors.text_primary))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.))
                    .child(div().text_sm().child("Scripts in Nautilus Scripts Folder:"))
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text_muted))
                            .child(format!(
                                "{}  ·  {} of {} enabled",
                                self.scripts_dir.display(),
                                executable_count,
                                entry_count
                            )),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .min_h(px(0.))
                    .overflow_hidden()
                    .border_1()
                    .border_color(rgb(colors.border))
                    .rounded(px(6.))
                    .child(self.render_list(colors, cx)),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap(px(8.))
                    .child(
                        Button::new("open-editor", "Create / Edit Scripts in Editor", button_colors)
                            .variant(ButtonVariant::Primary)
                            .disabled(self.picking_editor)
                            .on_click(Box::new(open_editor)),
                    )
                    .child(
                        Button::new("refresh", "Refresh List", button_colors)
                            .variant(ButtonVariant::Secondary)
                            .on_click(Box::new(refresh)),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_user_refresh_always_reports() {
        assert!(RefreshTrigger::User.reports_error(false));
        assert!(RefreshTrigger::User.reports_error(true));
    }

    #[test]
    fn test_watcher_refresh_reports_first_failure_only() {
        assert!(RefreshTrigger::Watcher.reports_error(false));
        assert!(!RefreshTrigger::Watcher.reports_error(true));
    }

    #[test]
    fn test_reload_of_unusable_dir_is_scripts_dir_error() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("scripts");
        fs::write(&not_a_dir, "").unwrap();

        let mut listing = ScriptsListing::default();
        assert!(!listing.is_failing());

        let err = listing.reload(&not_a_dir).unwrap_err();
        assert!(matches!(err, ManagerError::ScriptsDir { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(listing.is_failing());
        assert!(listing.entries.is_empty());
        assert_eq!(listing.load_error, Some(err.user_message()));
    }

    #[test]
    fn test_reload_recovers_after_failure() {
        let temp = TempDir::new().unwrap();
        let scripts_dir = temp.path().join("scripts");
        fs::write(&scripts_dir, "").unwrap();

        let mut listing = ScriptsListing::default();
        assert!(listing.reload(&scripts_dir).is_err());

        fs::remove_file(&scripts_dir).unwrap();
        fs::create_dir(&scripts_dir).unwrap();
        fs::write(scripts_dir.join("hello"), "#!/bin/sh\n").unwrap();

        listing.reload(&scripts_dir).unwrap();
        assert!(!listing.is_failing());
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].name, "hello");
    }
}
