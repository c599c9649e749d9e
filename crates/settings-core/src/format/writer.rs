//! Serializer for settings files.
//!
//! Output rules:
//! - sections in lexicographic name order, settings in lexicographic key order;
//! - sections without settings are omitted, header included;
//! - a setting whose value renders as the empty string is omitted, although
//!   its section header is still written;
//! - each setting is written as `key = value`, and every line ends in `\n`.
//!
//! Text that would not parse back to what was written is left out and
//! reported as [`Unwritable`].  This covers line breaks in names or values,
//! a second `=`, a setting line that reads as a `[header]`, and keys or values
//! with surrounding whitespace that the parser would trim.

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::model::SettingsFile;
use crate::format::parser::{section_header, split_setting};

/// A section or setting left out of the output because it would not reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unwritable {
    #[error("section name {name:?} cannot be written as a header; section skipped")]
    SectionName { name: String },
    #[error("setting {key:?} = {value:?} in [{section}] would not reload as written; setting skipped")]
    Setting {
        section: String,
        key: String,
        value: String,
    },
}

/// Lines of the serialized file plus everything that was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Output lines, without line terminators.
    pub lines: Vec<String>,
    pub skipped: Vec<Unwritable>,
}

/// Produces the serialized lines of `file` and the items that were skipped.
pub fn render_lines(file: &SettingsFile) -> RenderOutcome {
    let mut outcome = RenderOutcome::default();
    for section in file.sections_sorted().filter(|s| !s.is_empty()) {
        let name = section.name();
        let header = format!("[{name}]");
        if has_line_break(&header) || section_header(&header) != Some(name) {
            outcome.skipped.push(Unwritable::SectionName {
                name: name.to_owned(),
            });
            continue;
        }
        outcome.lines.push(header);

        for setting in section.iter_sorted() {
            let value = setting.value_as_string();
            if value.is_empty() {
                continue;
            }
            match setting_line(setting.key(), &value) {
                Some(line) => outcome.lines.push(line),
                None => outcome.skipped.push(Unwritable::Setting {
                    section: name.to_owned(),
                    key: setting.key().to_owned(),
                    value,
                }),
            }
        }
    }
    outcome
}

/// Everything [`render`] and [`write_to`] would leave out of `file`.
pub fn unwritable(file: &SettingsFile) -> Vec<Unwritable> {
    render_lines(file).skipped
}

/// Formats `key = value`, or `None` if the parser would read the line back
/// as something else.
fn setting_line(key: &str, value: &str) -> Option<String> {
    let line = format!("{key} = {value}");
    let reloads = !has_line_break(&line)
        && section_header(&line).is_none()
        && split_setting(&line) == Ok((key, value));
    reloads.then_some(line)
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Renders `file` as settings-file text, leaving out [`unwritable`] items.
///
/// # Examples
///
/// ```rust
/// use settings_core::{render, SettingsFile};
///
/// let mut file = SettingsFile::new();
/// file.put("Renderer", "use_hw_renderer", true);
/// file.put("Core", "use_cpu_jit", false);
///
/// assert_eq!(
///     render(&file),
///     "[Core]\nuse_cpu_jit = False\n[Renderer]\nuse_hw_renderer = True\n"
/// );
/// ```
pub fn render(file: &SettingsFile) -> String {
    let mut text = String::new();
    for line in render_lines(file).lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// Streams the serialized form of `file` into `out`, line by line.
///
/// [`unwritable`] items are left out, as in [`render`].
///
/// # Errors
///
/// Returns the first I/O error raised by `out`.  Lines written before the
/// failure stay written.
pub fn write_to<W: Write>(file: &SettingsFile, mut out: W) -> io::Result<()> {
    for line in render_lines(file).lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
