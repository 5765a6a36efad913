//! Runs the extraction pipeline for parsed CLI arguments.

use std::path::PathBuf;

use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::{ProjectConfig, default_env},
    core::{LocaleStats, build_experiments, extract, write_experiments},
};

/// One written bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenExperiment {
    pub experiment: String,
    pub complete_locales: Vec<String>,
    pub path: PathBuf,
}

/// Everything the report needs to describe a run.
#[derive(Debug)]
pub struct RunResult {
    pub reference_locale: String,
    pub locales: Vec<LocaleStats>,
    pub reference_files: usize,
    /// Experiments seen in the reference before filtering.
    pub experiment_count: usize,
    pub written: Vec<WrittenExperiment>,
}

pub fn run(args: &Arguments) -> Result<RunResult> {
    let config = ProjectConfig::load(&args.toml_path, &default_env())?;

    let extraction = extract(&config, &args.reference_locale)?;
    let experiment_count = extraction
        .table
        .locale(&args.reference_locale)
        .map_or(0, |strings| {
            let mut ids: Vec<&str> = strings.keys().map(|k| k.experiment.as_str()).collect();
            ids.dedup();
            ids.len()
        });

    let experiments = build_experiments(&extraction.table, &args.reference_locale);
    let paths = write_experiments(&args.dest_path, &experiments)?;

    let written = experiments
        .into_iter()
        .zip(paths)
        .map(|((experiment, record), path)| WrittenExperiment {
            experiment,
            complete_locales: record.complete_locales,
            path,
        })
        .collect();

    Ok(RunResult {
        reference_locale: args.reference_locale.clone(),
        locales: extraction.locales,
        reference_files: extraction.reference_files,
        experiment_count,
        written,
    })
}
