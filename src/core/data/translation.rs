use std::{collections::BTreeMap, fmt};

/// Identifies a message across all experiments of a locale.
///
/// Ordered by experiment first, so all keys of one experiment are adjacent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey {
    /// Base name of the reference file the message comes from.
    pub experiment: String,
    pub message: String,
}

impl CompositeKey {
    pub fn new(experiment: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            experiment: experiment.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.experiment, self.message)
    }
}

/// All translations of one locale.
pub type LocaleTranslations = BTreeMap<CompositeKey, String>;

/// Translations of every locale, keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    locales: BTreeMap<String, LocaleTranslations>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a translation. A later insert for the same key wins.
    pub fn insert(&mut self, locale: &str, key: CompositeKey, value: impl Into<String>) {
        self.locale_mut(locale).insert(key, value.into());
    }

    /// The translations of `locale`, created empty on first access.
    pub fn locale_mut(&mut self, locale: &str) -> &mut LocaleTranslations {
        self.locales.entry(locale.to_string()).or_default()
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleTranslations> {
        self.locales.get(locale)
    }

    pub fn get(&self, locale: &str, key: &CompositeKey) -> Option<&str> {
        self.locale(locale)?.get(key).map(String::as_str)
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleTranslations)> {
        self.locales.iter().map(|(locale, map)| (locale.as_str(), map))
    }

    /// Number of strings held for `locale`.
    pub fn len(&self, locale: &str) -> usize {
        self.locale(locale).map_or(0, LocaleTranslations::len)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.values().all(LocaleTranslations::is_empty)
    }

    /// Drop, from every locale other than `reference`, keys the reference does not have.
    pub fn retain_reference_keys(&mut self, reference: &str) {
        let Some(reference_keys) = self.locales.get(reference).cloned() else {
            self.locales.values_mut().for_each(LocaleTranslations::clear);
            return;
        };
        for (locale, map) in self.locales.iter_mut() {
            if locale != reference {
                map.retain(|key, _| reference_keys.contains_key(key));
            }
        }
    }
}
