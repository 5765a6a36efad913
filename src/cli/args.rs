//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_REFERENCE_LOCALE;

/// Extract complete per-experiment translation bundles from an l10n project.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the l10n.toml project configuration
    #[arg(long = "toml", value_name = "PATH")]
    pub toml_path: PathBuf,

    /// Reference language code
    #[arg(long = "ref", value_name = "LOCALE", default_value = DEFAULT_REFERENCE_LOCALE)]
    pub reference_locale: String,

    /// Directory the JSON files are written to (must already exist)
    #[arg(long = "dest", value_name = "PATH")]
    pub dest_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
