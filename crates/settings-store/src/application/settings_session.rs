//! Use case: edit settings from the settings screen and write them back.
//!
//! A [`SettingsSession`] loads the settings file once when it is opened,
//! keeps the in-memory [`SettingsFile`] while the user edits it, and writes
//! the whole file back on [`SettingsSession::save`].  It tracks whether
//! anything changed since the last load or successful save, so the UI can
//! enable or disable its "save" action.

use settings_core::{KnownKey, Setting, SettingValue, SettingsFile};
use tracing::debug;

use crate::infrastructure::log_sink::LogSink;
use crate::infrastructure::paths::ConfigPathProvider;
use crate::infrastructure::storage::ini_file;
use crate::infrastructure::ui_bridge::{self, SectionDto, SettingEditDto};

/// One editing session over the settings file located by `P`.
pub struct SettingsSession<P: ConfigPathProvider, S: LogSink> {
    paths: P,
    sink: S,
    settings: SettingsFile,
    dirty: bool,
}

impl<P: ConfigPathProvider, S: LogSink> SettingsSession<P, S> {
    /// Loads the settings file and starts a clean session.
    ///
    /// A missing or unreadable file yields an empty session; the error is
    /// reported to `sink`.
    pub fn open(paths: P, sink: S) -> Self {
        let settings = ini_file::load(&paths, &sink);
        Self {
            paths,
            sink,
            settings,
            dirty: false,
        }
    }

    /// Discards in-memory edits and loads the file again.
    pub fn reload(&mut self) {
        self.settings = ini_file::load(&self.paths, &self.sink);
        self.dirty = false;
    }

    pub fn settings(&self) -> &SettingsFile {
        &self.settings
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&SettingValue> {
        self.settings.get(section, key).map(Setting::value)
    }

    pub fn get_known(&self, known: KnownKey) -> Option<&SettingValue> {
        self.get(known.section, known.key)
    }

    /// Stores a value.  The session becomes dirty only if the stored value
    /// actually changed.
    pub fn put(&mut self, section: &str, key: &str, value: impl Into<SettingValue>) {
        let value = value.into();
        if self.get(section, key) == Some(&value) {
            return;
        }
        debug!(section, key, %value, "setting changed");
        self.settings.put(section, key, value);
        self.dirty = true;
    }

    pub fn put_known(&mut self, known: KnownKey, value: impl Into<SettingValue>) {
        self.put(known.section, known.key, value);
    }

    pub fn remove(&mut self, section: &str, key: &str) -> Option<Setting> {
        let removed = self.settings.remove(section, key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Applies a batch of edits from the UI.
    pub fn apply_edits(&mut self, edits: impl IntoIterator<Item = SettingEditDto>) {
        if ui_bridge::apply(&mut self.settings, edits) > 0 {
            self.dirty = true;
        }
    }

    /// Sorted snapshot for the UI.
    pub fn snapshot(&self) -> Vec<SectionDto> {
        ui_bridge::snapshot(&self.settings)
    }

    /// `true` if there are edits that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the settings file.
    ///
    /// Returns `true` on success, which also clears the dirty flag.  On
    /// failure the error is reported to the sink and the session stays dirty.
    pub fn save(&mut self) -> bool {
        let saved = ini_file::save(&self.paths, &self.settings, &self.sink);
        if saved {
            self.dirty = false;
        }
        saved
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Ends the session, returning the in-memory settings.
    pub fn into_settings(self) -> SettingsFile {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::log_sink::mock::RecordingSink;
    use crate::infrastructure::paths::FixedPath;
    use settings_core::keys;

    fn session_in(dir: &tempfile::TempDir) -> SettingsSession<FixedPath, RecordingSink> {
        SettingsSession::open(
            FixedPath::new(dir.path().join("config.ini")),
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_open_missing_file_gives_clean_empty_session() {
        // Arrange
        let dir = tempfile::tempdir().expect("temp dir");

        // Act
        let session = session_in(&dir);

        // Assert
        assert!(session.settings().is_empty());
        assert!(!session.is_dirty());
        assert_eq!(session.sink().errors().len(), 1);
    }

    #[test]
    fn test_put_marks_dirty_only_on_change() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = session_in(&dir);

        session.put_known(keys::USE_CPU_JIT, true);
        assert!(session.is_dirty());
        assert!(session.save());
        assert!(!session.is_dirty());

        session.put_known(keys::USE_CPU_JIT, true);
        assert!(!session.is_dirty(), "same value must not dirty the session");
    }

    #[test]
    fn test_save_then_reload_restores_saved_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = session_in(&dir);
        session.put_known(keys::RESOLUTION_FACTOR, 3_i64);
        assert!(session.save());

        session.put_known(keys::RESOLUTION_FACTOR, 5_i64);
        session.reload();

        assert_eq!(
            session.get_known(keys::RESOLUTION_FACTOR),
            Some(&SettingValue::Int(3))
        );
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_remove_missing_key_keeps_session_clean() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = session_in(&dir);

        assert!(session.remove("Core", "nothing").is_none());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_save_keeps_session_dirty() {
        // Arrange: point the session at an existing directory
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = SettingsSession::open(FixedPath::new(dir.path()), RecordingSink::new());
        session.put("Core", "use_cpu_jit", true);

        // Act
        let saved = session.save();

        // Assert
        assert!(!saved);
        assert!(session.is_dirty());
        assert!(!session.sink().errors().is_empty());
    }

    #[test]
    fn test_into_settings_returns_unsaved_edits() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = session_in(&dir);
        session.put_known(keys::LAYOUT_OPTION, 1_i64);

        let settings = session.into_settings();

        assert_eq!(
            settings.get_known(keys::LAYOUT_OPTION).map(|s| s.value().clone()),
            Some(SettingValue::Int(1))
        );
        assert!(!dir.path().join("config.ini").exists(), "nothing was saved");
    }
}
