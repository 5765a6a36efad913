//! Reshape-and-filter pass: turn a [`TranslationTable`] into per-experiment records.
//!
//! A locale is complete for an experiment when it has every message id the
//! reference locale has for it. Incomplete locales are dropped from the
//! experiment, and experiments where no locale besides the reference is
//! complete are dropped entirely.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::core::data::{ExperimentRecord, Experiments, TranslationTable};

/// experiment → locale → message id → translation
type Inverted = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

fn invert(table: &TranslationTable) -> Inverted {
    let mut inverted = Inverted::new();
    for (locale, translations) in table.iter() {
        for (key, value) in translations {
            inverted
                .entry(key.experiment.clone())
                .or_default()
                .entry(locale.to_string())
                .or_default()
                .insert(key.message.clone(), value.clone());
        }
    }
    inverted
}

/// Build the output records for every experiment with at least one complete translation.
pub fn build_experiments(table: &TranslationTable, reference_locale: &str) -> Experiments {
    let mut experiments = Experiments::new();

    for (experiment, mut translations) in invert(table) {
        let Some(reference) = translations.get(reference_locale) else {
            debug!(experiment = %experiment, "No reference strings, skipping");
            continue;
        };
        let reference_ids: BTreeSet<String> = reference.keys().cloned().collect();

        // BTreeMap keys are already in lexicographic order.
        let (complete, incomplete): (Vec<_>, Vec<_>) = translations
            .iter()
            .partition(|(_, messages)| reference_ids.iter().all(|id| messages.contains_key(id)));
        let complete_locales: Vec<String> =
            complete.into_iter().map(|(locale, _)| locale.clone()).collect();
        let incomplete_locales: Vec<String> =
            incomplete.into_iter().map(|(locale, _)| locale.clone()).collect();

        for locale in &incomplete_locales {
            translations.remove(locale);
        }

        if complete_locales.iter().all(|locale| locale == reference_locale) {
            debug!(experiment = %experiment, "No complete translations, skipping");
            continue;
        }

        experiments.insert(
            experiment,
            ExperimentRecord {
                translations,
                complete_locales,
            },
        );
    }

    experiments
}
