//! Checkable row for the scripts list

use gpui::{
    div, prelude::*, px, rgb, rgba, App, ClickEvent, ElementId, FontWeight, SharedString, Window,
};
use std::rc::Rc;

/// Fixed height for list rows (uniform_list needs every row the same height)
pub const LIST_ITEM_HEIGHT: f32 = 32.0;

/// Pre-computed colors for row rendering, cheap to copy into closures
#[derive(Clone, Copy, Debug)]
pub struct ListItemColors {
    pub text_primary: u32,
    pub text_muted: u32,
    pub background: u32,
    pub background_hover: u32,
    pub border: u32,
    pub checkbox_checked: u32,
    pub checkbox_mark: u32,
}

impl Default for ListItemColors {
    fn default() -> Self {
        Self {
            text_primary: 0xe5e5e5,
            text_muted: 0x8a8a8a,
            background: 0x1e1e1e,
            background_hover: 0x2a2a2a,
            border: 0x464647,
            checkbox_checked: 0x4a9eff,
            checkbox_mark: 0x1e1e1e,
        }
    }
}

/// Callback fired when the row's checkbox is clicked
pub type OnToggleCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// One script: a checkbox reflecting the executable bit plus the file name
///
/// ```ignore
/// ScriptListItem::new(ix, "Open Terminal Here", colors)
///     .checked(entry.is_executable)
///     .on_toggle(Box::new(move |_, window, cx| { /* chmod */ }))
/// ```
#[derive(IntoElement)]
pub struct ScriptListItem {
    index: usize,
    name: SharedString,
    colors: ListItemColors,
    checked: bool,
    enabled: bool,
    tag: Option<SharedString>,
    on_toggle: Option<Rc<OnToggleCallback>>,
}

impl ScriptListItem {
    pub fn new(index: usize, name: impl Into<SharedString>, colors: ListItemColors) -> Self {
        Self {
            index,
            name: name.into(),
            colors,
            checked: false,
            enabled: true,
            tag: None,
            on_toggle: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Disabled rows show their state but ignore clicks
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Small muted label after the name (e.g. "folder")
    pub fn tag(mut self, tag: impl Into<SharedString>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn on_toggle(mut self, callback: OnToggleCallback) -> Self {
        self.on_toggle = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for ScriptListItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let checked = self.checked;
        let enabled = self.enabled;

        let box_bg = if checked {
            rgb(colors.checkbox_checked)
        } else {
            rgba((colors.background << 8) | 0x80)
        };

        let mut checkbox_box = div()
            .flex()
            .items_center()
            .justify_center()
            .flex_shrink_0()
            .w(px(16.))
            .h(px(16.))
            .bg(box_bg)
            .border_1()
            .border_color(rgb(colors.border))
            .rounded(px(4.));

        if checked {
            checkbox_box = checkbox_box.child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.checkbox_mark))
                    .font_weight(FontWeight::BOLD)
                    .child("✓"),
            );
        }

        let hover_bg = rgba((colors.background_hover << 8) | 0xFF);

        let mut row = div()
            .id(ElementId::NamedInteger("script-row".into(), self.index as u64))
            .w_full()
            .h(px(LIST_ITEM_HEIGHT))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.))
            .px(px(10.))
            .child(checkbox_box)
            .child(
                div()
                    .flex_1()
                    .min_w(px(0.))
                    .overflow_hidden()
                    .text_ellipsis()
                    .whitespace_nowrap()
                    .text_sm()
                    .text_color(rgb(colors.text_primary))
                    .child(self.name),
            )
            .when_some(self.tag, |row, tag| {
                row.child(
                    div()
                        .text_xs()
                        .text_color(rgb(colors.text_muted))
                        .child(tag),
                )
            });

        if enabled {
            row = row.cursor_pointer().hover(move |s| s.bg(hover_bg));
            if let Some(callback) = self.on_toggle {
                row = row.on_click(move |event, window, cx| {
                    callback(event, window, cx);
                });
            }
        } else {
            row = row.opacity(0.6);
        }

        row
    }
}
