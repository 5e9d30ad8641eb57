//! Nautilus Scripts Manager - toggle the executable bit of Nautilus scripts
//!
//! This library provides the directory projection, permission toggling,
//! directory watching and editor launching behind the GPUI window in
//! `main.rs`.

pub mod components;
pub mod config;
pub mod editor_launcher;
pub mod error;
pub mod list_item;
pub mod logging;
pub mod manager_view;
pub mod scripts;
pub mod setup;
pub mod watcher;
