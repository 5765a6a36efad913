//! Locale file discovery.
//!
//! - `pattern`: `[[paths]]` patterns with `*`/`**` wildcards
//! - `project_files`: (localized file, reference file) pairs for one locale

pub mod pattern;
pub mod project_files;

pub use pattern::{LOCALE_PLACEHOLDER, PathPattern, ResolvedPattern, Wildcard};
pub use project_files::{FilePair, project_files};
