//! Config file path resolution.
//!
//! The settings file lives in the platform-appropriate config directory:
//! - Windows:  `%APPDATA%\citra-emu\config.ini`
//! - Linux:    `$XDG_CONFIG_HOME/citra-emu/config.ini` or `~/.config/citra-emu/config.ini`
//! - macOS:    `~/Library/Application Support/citra-emu/config.ini`
//!
//! Callers that already know the path (tests, portable installs) use
//! [`FixedPath`] instead.

use std::path::{Path, PathBuf};

use crate::infrastructure::storage::ini_file::SettingsError;

/// Directory created under the platform config base.
pub const DEFAULT_APP_DIR: &str = "citra-emu";

/// Name of the settings file inside [`DEFAULT_APP_DIR`].
pub const DEFAULT_FILE_NAME: &str = "config.ini";

/// Yields the on-disk location of the settings file.
pub trait ConfigPathProvider {
    /// Resolves the full path to the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoPlatformConfigDir`] when the location cannot
    /// be determined from the environment.
    fn config_file(&self) -> Result<PathBuf, SettingsError>;
}

impl<P: ConfigPathProvider + ?Sized> ConfigPathProvider for &P {
    fn config_file(&self) -> Result<PathBuf, SettingsError> {
        (**self).config_file()
    }
}

/// Always resolves to the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPath(pub PathBuf);

impl FixedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl ConfigPathProvider for FixedPath {
    fn config_file(&self) -> Result<PathBuf, SettingsError> {
        Ok(self.0.clone())
    }
}

/// Resolves `<platform config dir>/<app_dir>/<file_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPaths {
    pub app_dir: String,
    pub file_name: String,
}

impl Default for PlatformPaths {
    fn default() -> Self {
        Self {
            app_dir: DEFAULT_APP_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl PlatformPaths {
    /// Joins the app directory and file name onto `base`.
    pub fn resolve_in(&self, base: &Path) -> PathBuf {
        base.join(&self.app_dir).join(&self.file_name)
    }
}

impl ConfigPathProvider for PlatformPaths {
    fn config_file(&self) -> Result<PathBuf, SettingsError> {
        platform_config_base()
            .map(|base| self.resolve_in(&base))
            .ok_or(SettingsError::NoPlatformConfigDir)
    }
}

/// Resolves the platform config base directory, without the app subdirectory.
fn platform_config_base() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}
