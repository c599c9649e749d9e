//! The in-memory settings model: [`Setting`], [`Section`], and [`SettingsFile`].
//!
//! Both maps are plain `HashMap`s.  Nothing here preserves insertion order;
//! callers that need a stable order (the serializer, the UI snapshot) use the
//! `*_sorted` iterators, which sort at call time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::value::SettingValue;
use crate::keys::KnownKey;

/// One typed key/value pair and the name of the section that owns it.
///
/// A `Setting` is immutable once built; replacing a value means putting a new
/// `Setting` into its [`Section`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    key: String,
    section: String,
    value: SettingValue,
}

impl Setting {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Self {
        Self {
            key: key.into(),
            section: section.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name of the section this setting was created for.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn value(&self) -> &SettingValue {
        &self.value
    }

    /// The token written to disk for this setting's value.
    ///
    /// An empty result means the serializer skips the setting.
    pub fn value_as_string(&self) -> String {
        self.value.to_string()
    }
}

/// A named group of settings, written on disk as a `[name]` header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    settings: HashMap<String, Setting>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.settings.get(key)
    }

    /// Stores `value` under `key`, returning the setting it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Option<Setting> {
        let setting = Setting::new(self.name.clone(), key, value);
        self.settings.insert(setting.key.clone(), setting)
    }

    pub fn remove(&mut self, key: &str) -> Option<Setting> {
        self.settings.remove(key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    /// Settings in lexicographic key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Setting> {
        let mut settings: Vec<&Setting> = self.settings.values().collect();
        settings.sort_by(|a, b| a.key.cmp(&b.key));
        settings.into_iter()
    }
}

/// Every section of one settings file, keyed by section name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    sections: HashMap<String, Section>,
}

impl SettingsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns the named section, creating an empty one if it is missing.
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        self.sections
            .entry(name.to_owned())
            .or_insert_with(|| Section::new(name))
    }

    /// Inserts `section`, returning any section previously stored under the
    /// same name.
    pub fn insert_section(&mut self, section: Section) -> Option<Section> {
        self.sections.insert(section.name.clone(), section)
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Setting> {
        self.sections.get(section)?.get(key)
    }

    /// Stores a value, creating its section when needed.
    pub fn put(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Option<Setting> {
        self.section_or_insert(section).put(key, value)
    }

    /// Removes one setting.  The section itself stays, even when emptied.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<Setting> {
        self.sections.get_mut(section)?.remove(key)
    }

    pub fn get_known(&self, known: KnownKey) -> Option<&Setting> {
        self.get(known.section, known.key)
    }

    pub fn put_known(&mut self, known: KnownKey, value: impl Into<SettingValue>) -> Option<Setting> {
        self.put(known.section, known.key, value)
    }

    /// Number of sections, including empty ones.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of settings across all sections.
    pub fn setting_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Sections in arbitrary order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Sections in lexicographic name order.
    pub fn sections_sorted(&self) -> impl Iterator<Item = &Section> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort_by(|a, b| a.name.cmp(&b.name));
        sections.into_iter()
    }
}
