//! Extraction pass: read every locale's files into a [`TranslationTable`].
//!
//! For each declared locale, the (localized, reference) file pairs of the
//! project are visited. Pairs with a missing file or an unsupported format
//! are skipped without error. Reference files are parsed once each and
//! recorded under the reference locale; localized files are recorded under
//! their own locale. Keys a locale has but the reference does not are
//! dropped once every locale has been read, so the result does not depend
//! on where the reference locale appears in the locale list.

use std::{
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    config::ProjectConfig,
    core::{
        data::{CompositeKey, TranslationTable},
        files::{FilePair, project_files},
        parsers::{EntityParser, parser_for},
    },
};

/// Per-locale counters for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: String,
    /// File pairs that were parsed.
    pub files: usize,
    /// Strings kept after dropping keys unknown to the reference.
    pub strings: usize,
}

/// Result of the extraction pass.
#[derive(Debug, Default)]
pub struct Extraction {
    pub table: TranslationTable,
    /// One entry per declared locale, in declaration order.
    pub locales: Vec<LocaleStats>,
    /// Distinct reference files parsed.
    pub reference_files: usize,
}

/// Experiment id of a reference file: its base name without extension.
pub fn experiment_id(reference: &Path) -> Option<String> {
    reference
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Build the translation table of a project.
pub fn extract(config: &ProjectConfig, reference_locale: &str) -> Result<Extraction> {
    let mut table = TranslationTable::new();
    // Reference keys per reference file. Paths come normalized from the
    // resolver, including files of included configs outside the root.
    let mut reference_cache: HashMap<PathBuf, BTreeSet<String>> = HashMap::new();
    let mut file_counts = Vec::with_capacity(config.all_locales.len());

    if config.all_locales.is_empty() {
        info!("No locales defined in the project configuration");
    }

    for locale in &config.all_locales {
        info!(locale = %locale, "Extracting strings");
        let mut files = 0;

        for pair in project_files(locale, config)? {
            if extract_pair(
                &pair,
                locale,
                reference_locale,
                &mut reference_cache,
                &mut table,
            )? {
                files += 1;
            }
        }

        file_counts.push((locale.clone(), files));
    }

    table.retain_reference_keys(reference_locale);

    let locales = file_counts
        .into_iter()
        .map(|(locale, files)| LocaleStats {
            strings: table.len(&locale),
            locale,
            files,
        })
        .collect();

    Ok(Extraction {
        table,
        locales,
        reference_files: reference_cache.len(),
    })
}

/// Parse one file pair into `table`. Returns `false` if the pair was skipped.
fn extract_pair(
    pair: &FilePair,
    locale: &str,
    reference_locale: &str,
    reference_cache: &mut HashMap<PathBuf, BTreeSet<String>>,
    table: &mut TranslationTable,
) -> Result<bool> {
    if !pair.l10n.exists() {
        debug!(path = %pair.l10n.display(), "File not available in localization");
        return Ok(false);
    }
    if !pair.reference.exists() {
        debug!(path = %pair.reference.display(), "File not available in reference");
        return Ok(false);
    }

    let Some(experiment) = experiment_id(&pair.reference) else {
        debug!(path = %pair.reference.display(), "No experiment id for file");
        return Ok(false);
    };
    let Some(parser) = parser_for(&pair.reference) else {
        debug!(path = %pair.reference.display(), "Unsupported file format");
        return Ok(false);
    };

    if !reference_cache.contains_key(&pair.reference) {
        let entities = parser.parse_file(&pair.reference)?;
        reference_cache.insert(
            pair.reference.clone(),
            entities.iter().map(|entity| entity.key.clone()).collect(),
        );
        for entity in entities {
            table.insert(
                reference_locale,
                CompositeKey::new(&experiment, entity.key),
                entity.raw_val,
            );
        }
    }

    for entity in parser.parse_file(&pair.l10n)? {
        table.insert(
            locale,
            CompositeKey::new(&experiment, entity.key),
            entity.raw_val,
        );
    }

    Ok(true)
}
