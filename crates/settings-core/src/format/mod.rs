//! INI-style text format for settings files.
//!
//! ```text
//! [SectionName]
//! key1 = value1
//! key2 = value2
//! ```
//!
//! Both directions are pure functions over strings and writers; reading and
//! writing the actual file is the store crate's job.

pub mod parser;
pub mod writer;

pub use parser::{parse, LineIssue, LineIssueKind, ParseOutcome};
pub use writer::{render, render_lines, unwritable, write_to, RenderOutcome, Unwritable};
