//! Line parser for settings files.
//!
//! Lines are classified in this order:
//!
//! 1. A line of at least two characters that starts with `[` and ends with
//!    `]` opens a new section.  The test uses the raw line, so `" [Core]"` is
//!    not a header.
//! 2. A blank line is skipped silently.
//! 3. A line seen before any header is skipped and reported.
//! 4. Any other line must contain exactly one `=`.  Key and value are trimmed
//!    and the value is typed by [`SettingValue::infer`].  Lines with no `=` or
//!    with several are skipped and reported.
//!
//! Skipped lines never stop the parse.  They are returned as [`LineIssue`]s
//! so the caller decides where to log them.

use thiserror::Error;
use tracing::debug;

use crate::domain::model::{Section, SettingsFile};
use crate::domain::value::SettingValue;

/// Why a line was skipped, or why it overwrote earlier content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineIssueKind {
    #[error("no '=' separator")]
    MissingSeparator,
    #[error("more than one '=' separator")]
    ExtraSeparator,
    #[error("setting appears before any section header")]
    OutsideSection,
    /// The header repeats an earlier one; the earlier section is discarded.
    #[error("section header repeats an earlier one; earlier section discarded")]
    DuplicateSection,
}

/// A non-fatal problem found on one line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {kind}: {line:?}")]
pub struct LineIssue {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
    pub kind: LineIssueKind,
}

/// The result of parsing a whole file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub settings: SettingsFile,
    pub issues: Vec<LineIssue>,
}

/// Parses settings-file text.
///
/// Accepts both LF and CRLF line endings.
///
/// # Examples
///
/// ```rust
/// use settings_core::{parse, SettingValue};
///
/// let outcome = parse("[Core]\nuse_cpu_jit = True\nbroken line\n");
/// let jit = outcome.settings.get("Core", "use_cpu_jit").unwrap();
/// assert_eq!(jit.value(), &SettingValue::Bool(true));
/// assert_eq!(outcome.issues.len(), 1);
/// ```
pub fn parse(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut current: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        // `lines()` only strips `\r\n`; a stray `\r` before it (`\r\r\n`) or a
        // final `\r` with no `\n` is still attached here.
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line_number = index + 1;
        let mut report = |kind| {
            outcome.issues.push(LineIssue {
                line_number,
                line: line.to_owned(),
                kind,
            })
        };

        if let Some(name) = section_header(line) {
            if outcome.settings.insert_section(Section::new(name)).is_some() {
                report(LineIssueKind::DuplicateSection);
            }
            current = Some(name.to_owned());
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let Some(section) = current.as_deref() else {
            report(LineIssueKind::OutsideSection);
            continue;
        };

        match split_setting(line) {
            Ok((key, value)) => {
                outcome
                    .settings
                    .put(section, key, SettingValue::infer(value));
            }
            Err(kind) => report(kind),
        }
    }

    debug!(
        sections = outcome.settings.len(),
        settings = outcome.settings.setting_count(),
        skipped = outcome.issues.len(),
        "parsed settings text"
    );
    outcome
}

/// Returns the section name if `line` is a `[name]` header.
pub fn section_header(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

/// Splits a `key = value` line into its trimmed halves.
pub(crate) fn split_setting(line: &str) -> Result<(&str, &str), LineIssueKind> {
    match line.split_once('=') {
        None => Err(LineIssueKind::MissingSeparator),
        Some((_, value)) if value.contains('=') => Err(LineIssueKind::ExtraSeparator),
        Some((key, value)) => Ok((key.trim(), value.trim())),
    }
}
