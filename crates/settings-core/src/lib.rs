//! # emu-settings-core
//!
//! Shared library for the emulator settings UI containing the settings data
//! model, the value type sniffer, and the INI-style text format.
//!
//! This crate performs no file-system access and installs no logger.  The
//! `emu-settings-store` crate wires it to the disk and to a log sink.
//!
//! # Architecture overview (for beginners)
//!
//! The emulator keeps its user-facing settings in a small INI-style text file:
//!
//! ```text
//! [Renderer]
//! resolution_factor = 2
//! use_hw_renderer = True
//! ```
//!
//! Each bracketed line opens a **section**; every `key = value` line below it
//! is a **setting** belonging to that section.  Values are untyped text on
//! disk, so the loader *sniffs* a type for each one: integer, then float, then
//! boolean, and finally plain string.
//!
//! - **`domain`** – The in-memory model: [`SettingValue`], [`Setting`],
//!   [`Section`], and [`SettingsFile`].
//!
//! - **`format`** – Pure text conversion.  [`parse`] turns file contents into a
//!   [`SettingsFile`] plus a list of skipped lines; [`render`] turns a
//!   [`SettingsFile`] back into text with sections and keys sorted.
//!
//! - **`keys`** – The keys the settings UI edits, paired with the section each
//!   one lives in.

pub mod domain;
pub mod format;
pub mod keys;

// Re-export the most-used types at the crate root so callers can write
// `settings_core::SettingsFile` instead of `settings_core::domain::model::SettingsFile`.
pub use domain::model::{Section, Setting, SettingsFile};
pub use domain::value::{SettingValue, ValueKind};
pub use format::parser::{parse, LineIssue, LineIssueKind, ParseOutcome};
pub use format::writer::{render, render_lines, unwritable, write_to, RenderOutcome, Unwritable};
pub use keys::KnownKey;
