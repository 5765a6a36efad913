use std::{collections::HashSet, path::PathBuf};

use anyhow::Result;

use crate::config::ProjectConfig;

/// A localized file and the reference file it translates.
///
/// Neither path is guaranteed to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub l10n: PathBuf,
    pub reference: PathBuf,
}

/// Enumerate the file pairs a locale is expected to provide.
///
/// For every rule applying to `locale`, reference files found on disk are
/// mapped to their localized path first, then localized files without a
/// reference counterpart are added with the reference path they would have.
/// Pairs are unique by localized path and come out in walk order.
pub fn project_files(locale: &str, config: &ProjectConfig) -> Result<Vec<FilePair>> {
    let mut pairs = Vec::new();
    let mut seen = HashSet::new();

    for rule in config.rules.iter().filter(|rule| rule.applies_to(locale)) {
        let reference = rule.reference.resolve(locale)?;
        let l10n = rule.l10n.resolve(locale)?;

        let from_reference = reference
            .files()
            .into_iter()
            .map(|(path, captures)| FilePair {
                l10n: l10n.expand(&captures),
                reference: path,
            });
        let from_l10n = l10n.files().into_iter().map(|(path, captures)| FilePair {
            reference: reference.expand(&captures),
            l10n: path,
        });

        for pair in from_reference.chain(from_l10n) {
            if seen.insert(pair.l10n.clone()) {
                pairs.push(pair);
            }
        }
    }

    Ok(pairs)
}
