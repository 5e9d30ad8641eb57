//! Button component used for the window's command row

use gpui::{
    div, prelude::*, px, rgb, rgba, App, ClickEvent, ElementId, FontWeight, SharedString, Window,
};
use std::rc::Rc;

/// Button variant determines the visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent background
    #[default]
    Primary,
    /// Outlined, neutral background
    Secondary,
}

/// Pre-computed colors for Button rendering
#[derive(Clone, Copy, Debug)]
pub struct ButtonColors {
    pub text_color: u32,
    pub text_on_accent: u32,
    pub background: u32,
    pub background_hover: u32,
    pub accent: u32,
    pub border: u32,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            text_color: 0xe5e5e5,       // Light gray
            text_on_accent: 0x1e1e1e,   // Near black
            background: 0x2a2a2a,       // Dark gray
            background_hover: 0x3a3a3a, // Slightly lighter
            accent: 0x4a9eff,           // Blue
            border: 0x464647,
        }
    }
}

/// Callback type for button click events
pub type OnClickCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A button with a label, a variant and a click callback
///
/// # Example
/// ```ignore
/// Button::new("refresh", "Refresh List", ButtonColors::default())
///     .variant(ButtonVariant::Secondary)
///     .on_click(Box::new(|_, _, _| println!("Clicked!")))
/// ```
#[derive(IntoElement)]
pub struct Button {
    id: SharedString,
    label: SharedString,
    colors: ButtonColors,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Rc<OnClickCallback>>,
}

impl Button {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        colors: ButtonColors,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors,
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, callback: OnClickCallback) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let disabled = self.disabled;
        let on_click_callback = self.on_click;

        let (text_color, bg_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                rgb(colors.text_on_accent),
                rgba((colors.accent << 8) | 0xE6),
                rgba((colors.accent << 8) | 0xFF),
            ),
            ButtonVariant::Secondary => (
                rgb(colors.text_color),
                rgba((colors.background << 8) | 0xFF),
                rgba((colors.background_hover << 8) | 0xFF),
            ),
        };

        let mut button = div()
            .id(ElementId::Name(self.id))
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .px(px(12.))
            .py(px(6.))
            .rounded(px(6.))
            .border_1()
            .border_color(rgb(colors.border))
            .bg(bg_color)
            .text_color(text_color)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .child(self.label);

        if !disabled {
            button = button.hover(move |s| s.bg(hover_bg));
        } else {
            button = button.opacity(0.5).cursor_default();
        }

        if let Some(callback) = on_click_callback {
            if !disabled {
                button = button.on_click(move |event, window, cx| {
                    callback(event, window, cx);
                });
            }
        }

        button
    }
}

// Rendering is exercised through the manager window; gpui element tests need
// the full test harness.
