//! # clip-platform
//!
//! Platform-specific implementations for the ui-clip gallery.
//!
//! This crate contains the adapters that touch the operating system: the
//! system clipboard and per-user directories.

pub mod app_dirs;
pub mod clipboard;
