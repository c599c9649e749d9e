//! emu-settings-store library entry point.
//!
//! Connects the pure `emu-settings-core` model to the file system:
//!
//! - **`infrastructure`** – path resolution, the log sink, file-backed
//!   load/save, and the serialisable snapshot handed to the settings UI.
//! - **`application`** – [`SettingsSession`], the edit-then-save workflow the
//!   settings screen drives.
//!
//! Load and save never return errors to their caller.  Failures are reported
//! to the [`LogSink`] passed into each call and turned into a degraded result:
//! an empty [`SettingsFile`] on load, a partial or missing file on save.

pub mod application;
pub mod infrastructure;

pub use application::settings_session::SettingsSession;
pub use infrastructure::log_sink::{LogSink, TracingSink};
pub use infrastructure::paths::{ConfigPathProvider, FixedPath, PlatformPaths};
pub use infrastructure::storage::ini_file::{load, load_from, save, save_to, try_load, try_save, SettingsError};
pub use settings_core::{SettingValue, SettingsFile};
