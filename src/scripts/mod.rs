//! Scripts module - the Nautilus scripts directory as a checkable list
//!
//! - `types` - `ScriptEntry`, `EntryKind` and `ToggleRequest`
//! - `loader` - projection of the directory into sorted entries
//! - `permissions` - reading and toggling executable bits

mod loader;
mod permissions;
mod types;

pub use types::{EntryKind, ScriptEntry, ToggleRequest};

pub use loader::read_scripts;

pub use permissions::{is_user_executable, set_executable, toggled_mode};

#[cfg(test)]
#[path = "scripts_tests.rs"]
mod tests;
