//! File-backed loading and saving of settings files.
//!
//! Two layers live here:
//!
//! - [`try_load`] / [`try_save`] do the work and return `Result`, for callers
//!   that want to handle failures themselves.
//! - [`load`] / [`save`] (and the `*_from` / `*_to` variants taking a path)
//!   wrap them and never fail.  Errors and skipped lines go to the
//!   [`LogSink`], and the caller gets an empty [`SettingsFile`] or an
//!   abandoned write.
//!
//! The file handle is owned by the function that opened it and is dropped on
//! every return path, including early `?` returns.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use settings_core::{parse, unwritable, write_to, ParseOutcome, SettingsFile};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::log_sink::LogSink;
use crate::infrastructure::paths::ConfigPathProvider;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("settings file not found: {path}")]
    NotFound { path: PathBuf },

    /// The settings file exists but could not be read.
    #[error("error reading settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file (or its directory) could not be created or written.
    #[error("error writing settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid UTF-8.
    #[error("settings file {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,
}

// ── Fallible core ─────────────────────────────────────────────────────────────

/// Reads and parses the settings file at `path`.
///
/// A leading UTF-8 byte-order mark is ignored.
///
/// # Errors
///
/// Returns [`SettingsError::NotFound`] if the file is missing,
/// [`SettingsError::Read`] for any other I/O failure, and
/// [`SettingsError::Encoding`] if the contents are not UTF-8.
pub fn try_load(path: &Path) -> Result<ParseOutcome, SettingsError> {
    debug!("reading settings from {}", path.display());
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SettingsError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let text = String::from_utf8(bytes).map_err(|source| SettingsError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(parse(text))
}

/// Writes `settings` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`SettingsError::Write`] if the directory or file cannot be
/// created, or if a write fails part-way.  Lines written before a mid-write
/// failure remain in the file.
pub fn try_save(path: &Path, settings: &SettingsFile) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| SettingsError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_error = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    write_to(settings, BufWriter::new(file)).map_err(write_error)?;
    debug!("wrote settings to {}", path.display());
    Ok(())
}

// ── Non-failing boundary ──────────────────────────────────────────────────────

/// Loads the settings file located by `paths`.
///
/// Never fails: if the path cannot be resolved or the file cannot be read, the
/// error is sent to `sink` and an empty [`SettingsFile`] is returned.  Skipped
/// lines are sent to `sink` as warnings.
pub fn load(paths: &dyn ConfigPathProvider, sink: &dyn LogSink) -> SettingsFile {
    match paths.config_file() {
        Ok(path) => load_from(&path, sink),
        Err(e) => {
            sink.error(&format!("[SettingsFile] {e}"));
            SettingsFile::new()
        }
    }
}

/// Loads the settings file at `path`.  See [`load`].
pub fn load_from(path: &Path, sink: &dyn LogSink) -> SettingsFile {
    match try_load(path) {
        Ok(outcome) => {
            for issue in &outcome.issues {
                sink.warn(&format!(
                    "[SettingsFile] skipping config line in {}: {issue}",
                    path.display()
                ));
            }
            info!(
                sections = outcome.settings.len(),
                settings = outcome.settings.setting_count(),
                "loaded settings from {}",
                path.display()
            );
            outcome.settings
        }
        Err(e) => {
            sink.error(&format!("[SettingsFile] {e}"));
            SettingsFile::new()
        }
    }
}

/// Saves `settings` to the file located by `paths`.
///
/// Never fails: errors are sent to `sink` and the write is abandoned.
/// Returns `true` if the whole file was written.
pub fn save(paths: &dyn ConfigPathProvider, settings: &SettingsFile, sink: &dyn LogSink) -> bool {
    match paths.config_file() {
        Ok(path) => save_to(&path, settings, sink),
        Err(e) => {
            sink.error(&format!("[SettingsFile] {e}"));
            false
        }
    }
}

/// Saves `settings` to `path`.  See [`save`].
///
/// Sections and settings that would not reload as written are left out of
/// the file and reported to `sink` as warnings.
pub fn save_to(path: &Path, settings: &SettingsFile, sink: &dyn LogSink) -> bool {
    for skipped in unwritable(settings) {
        sink.warn(&format!(
            "[SettingsFile] not writing to {}: {skipped}",
            path.display()
        ));
    }
    match try_save(path, settings) {
        Ok(()) => {
            info!("saved settings to {}", path.display());
            true
        }
        Err(e) => {
            sink.error(&format!("[SettingsFile] {e}"));
            false
        }
    }
}
