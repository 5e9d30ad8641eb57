//! Reusable UI components
//!
//! - [`Button`] - Clickable button with Primary and Secondary variants
//!
//! Components follow the same pattern: a Copy colors struct, a builder API,
//! and `#[derive(IntoElement)]` with a `RenderOnce` impl.

pub mod button;

pub use button::{Button, ButtonColors, ButtonVariant};
