use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use gpui::{
    prelude::*, px, size, App, Application, Bounds, Focusable, Timer, TitlebarOptions,
    WindowBounds, WindowHandle, WindowOptions,
};
use tracing::{debug, info, warn};

use nautilus_scripts_manager::config::{self, Config};
use nautilus_scripts_manager::error::ResultExt;
use nautilus_scripts_manager::logging;
use nautilus_scripts_manager::manager_view::{RefreshTrigger, ScriptsManagerView, WINDOW_TITLE};
use nautilus_scripts_manager::setup;
use nautilus_scripts_manager::watcher::ScriptsDirWatcher;

/// How often the UI drains the watcher channel
const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

fn open_manager_window(
    cx: &mut App,
    scripts_dir: PathBuf,
    config: Config,
) -> anyhow::Result<WindowHandle<ScriptsManagerView>> {
    let bounds = Bounds::centered(None, size(px(500.), px(400.)), cx);

    let window = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            focus: true,
            show: true,
            ..Default::default()
        },
        |_window, cx| cx.new(|cx| ScriptsManagerView::new(scripts_dir, config, cx)),
    )?;

    window.update(cx, |view, window, cx| {
        let focus_handle = view.focus_handle(cx);
        window.focus(&focus_handle);
        view.report_startup_error(window, cx);
    })?;

    Ok(window)
}

/// Whether the watcher poll loop should continue after a refresh attempt.
/// The outer result is the app context, the inner one the window.
fn keep_polling(refreshed: anyhow::Result<anyhow::Result<()>>) -> bool {
    match refreshed {
        Ok(Ok(())) => true,
        Ok(Err(_)) => {
            debug!("Manager window closed, stopping scripts watcher");
            false
        }
        Err(_) => {
            debug!("App context gone, stopping scripts watcher");
            false
        }
    }
}

fn main() {
    let _guard = logging::init();

    let config = config::load_config();
    let scripts_dir = setup::get_scripts_dir(&config);
    info!(scripts_dir = %scripts_dir.display(), "Resolved scripts directory");

    setup::ensure_scripts_dir(&scripts_dir).log_err();

    let (mut scripts_watcher, scripts_rx) = ScriptsDirWatcher::new();
    if let Err(e) = scripts_watcher.start(&scripts_dir) {
        warn!(error = %e, "Failed to start scripts watcher, list only updates on Refresh");
    }

    Application::new().run(move |cx: &mut App| {
        let Some(window) = open_manager_window(cx, scripts_dir, config).log_err() else {
            cx.quit();
            return;
        };
        cx.activate(true);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                info!(event_type = "app_lifecycle", action = "quit", "Window closed");
                cx.quit();
            }
        })
        .detach();

        // Every batch of watcher events triggers one full refresh
        cx.spawn(async move |cx: &mut gpui::AsyncApp| {
            let _scripts_watcher = scripts_watcher;
            loop {
                Timer::after(WATCH_POLL_INTERVAL).await;

                let mut pending = 0usize;
                loop {
                    match scripts_rx.try_recv() {
                        Ok(_) => pending += 1,
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => {
                            debug!("Scripts watcher channel closed");
                            return;
                        }
                    }
                }
                if pending == 0 {
                    continue;
                }

                debug!(events = pending, "Scripts directory changed, refreshing");
                let refreshed = cx.update(|cx| {
                    window.update(cx, |view, window, cx| {
                        view.refresh_scripts(RefreshTrigger::Watcher, window, cx)
                    })
                });
                if !keep_polling(refreshed) {
                    break;
                }
            }
        })
        .detach();

        info!(event_type = "app_lifecycle", action = "ready", "Window ready");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_polling_stops_when_window_or_app_is_gone() {
        assert!(keep_polling(Ok(Ok(()))));
        assert!(!keep_polling(Ok(Err(anyhow::anyhow!("window not found")))));
        assert!(!keep_polling(Err(anyhow::anyhow!("app released"))));
    }
}
