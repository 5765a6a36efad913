use std::collections::BTreeMap;

use serde::Serialize;

/// The output bundle for one experiment.
///
/// Serialized as `{"translations": {...}, "complete_locales": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperimentRecord {
    /// locale → message id → translation, complete locales only.
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
    /// Sorted codes of the locales in `translations`.
    pub complete_locales: Vec<String>,
}

/// Experiment id → record.
pub type Experiments = BTreeMap<String, ExperimentRecord>;
