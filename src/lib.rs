//! extract-strings - per-experiment translation bundles from an l10n project
//!
//! Reads an `l10n.toml` project configuration, collects the strings of the
//! reference locale and of every translated locale, keeps only translations
//! that are complete for an experiment, and writes one JSON bundle per
//! experiment.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report)
//! - `config`: Project configuration loading and parsing
//! - `core`: Extraction, reshape and output pipeline
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
