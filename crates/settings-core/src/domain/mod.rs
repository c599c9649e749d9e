//! Domain entities for the settings file.
//!
//! This module contains the in-memory representation of a settings file and
//! has no infrastructure dependencies: it can be built and tested on any
//! platform without touching the disk.

/// Sections, settings, and the top-level settings map.
pub mod model;

/// Typed setting values and the ordered type-inference rules.
pub mod value;
