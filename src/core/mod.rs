//! Core extraction engine.
//!
//! The pipeline runs in three steps:
//!
//! 1. **Extraction** (`extract`): config → file pairs → parsed entities → [`TranslationTable`]
//! 2. **Reshape** (`reshape`): [`TranslationTable`] → complete [`Experiments`]
//! 3. **Output** (`output`): one JSON file per experiment
//!
//! ## Module Structure
//!
//! - `data`: CompositeKey, TranslationTable, ExperimentRecord
//! - `files`: path patterns and per-locale file pairs
//! - `parsers`: per-format entity parsers

pub mod data;
pub mod extract;
pub mod files;
pub mod output;
pub mod parsers;
pub mod reshape;

pub use data::{CompositeKey, ExperimentRecord, Experiments, TranslationTable};
pub use extract::{Extraction, LocaleStats, extract};
pub use output::write_experiments;
pub use reshape::build_experiments;
