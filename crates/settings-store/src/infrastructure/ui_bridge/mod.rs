//! Settings UI bridge: serialisable snapshots of a loaded settings file.
//!
//! The settings screen renders a list of sections, each with a list of typed
//! values.  The internal model keeps those in hash maps, so this module
//! converts it into plain, sorted Data Transfer Objects (DTOs) that
//! serialise to JSON:
//!
//! ```json
//! [
//!   { "name": "Core",
//!     "settings": [ { "key": "use_cpu_jit", "value": { "type": "bool", "value": true } } ] }
//! ]
//! ```
//!
//! Edits made in the UI come back as [`SettingDto`]s and are applied with
//! [`apply`].

use serde::{Deserialize, Serialize};
use settings_core::{SettingValue, SettingsFile};

/// One setting as shown in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDto {
    pub key: String,
    pub value: SettingValue,
}

/// One section as shown in the UI, settings sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDto {
    pub name: String,
    pub settings: Vec<SettingDto>,
}

/// An edit coming back from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEditDto {
    pub section: String,
    pub key: String,
    pub value: SettingValue,
}

/// Converts `settings` into sorted DTOs.  Empty sections are included so the
/// UI can show them.
pub fn snapshot(settings: &SettingsFile) -> Vec<SectionDto> {
    settings
        .sections_sorted()
        .map(|section| SectionDto {
            name: section.name().to_owned(),
            settings: section
                .iter_sorted()
                .map(|s| SettingDto {
                    key: s.key().to_owned(),
                    value: s.value().clone(),
                })
                .collect(),
        })
        .collect()
}

/// Serialises a snapshot of `settings` to JSON.
///
/// # Errors
///
/// Returns the `serde_json` error if serialisation fails.
pub fn snapshot_json(settings: &SettingsFile) -> serde_json::Result<String> {
    serde_json::to_string(&snapshot(settings))
}

/// Applies UI edits to `settings`, creating sections as needed.
///
/// Returns the number of edits that changed a stored value.
pub fn apply(settings: &mut SettingsFile, edits: impl IntoIterator<Item = SettingEditDto>) -> usize {
    let mut changed = 0;
    for edit in edits {
        let unchanged = settings
            .get(&edit.section, &edit.key)
            .is_some_and(|current| current.value() == &edit.value);
        if !unchanged {
            settings.put(&edit.section, edit.key, edit.value);
            changed += 1;
        }
    }
    changed
}
