//! Storage infrastructure: settings file persistence.
//!
//! The `ini_file` sub-module handles:
//!
//! - Reading the settings file and handing its text to the core parser.
//! - Writing a [`SettingsFile`](settings_core::SettingsFile) back to disk in
//!   sorted order.
//! - Containing every I/O failure at the load/save boundary, so callers always
//!   get a usable result.

pub mod ini_file;
