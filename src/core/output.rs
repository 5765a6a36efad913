use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::data::{ExperimentRecord, Experiments};

/// Render a record the way it is written to disk: pretty JSON, 2-space indent,
/// non-ASCII characters kept as-is, no trailing newline.
pub fn render_record(record: &ExperimentRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Failed to serialize experiment")
}

/// Write one `<experiment>.json` per experiment into `dest`.
///
/// `dest` must already exist. Existing files are overwritten; files written
/// before an error are left in place.
pub fn write_experiments(dest: &Path, experiments: &Experiments) -> Result<Vec<PathBuf>> {
    if !dest.is_dir() {
        bail!(
            "Destination directory '{}' does not exist.",
            dest.display()
        );
    }

    let mut written = Vec::with_capacity(experiments.len());
    for (experiment, record) in experiments {
        let path = dest.join(format!("{}.json", experiment));
        let content = render_record(record)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        debug!(path = %path.display(), "Wrote experiment");
        written.push(path);
    }

    Ok(written)
}
