//! Project configuration (`l10n.toml`) loading.
//!
//! The configuration declares which locales exist and where reference and
//! localized files live:
//!
//! ```toml
//! basepath = "."
//! locales = ["de", "fr"]
//!
//! [env]
//! l10n_base = "../l10n"
//!
//! [[paths]]
//! reference = "en-US/**/*.ftl"
//! l10n = "{l10n_base}/{locale}/**/*.ftl"
//!
//! [[includes]]
//! path = "extensions/l10n.toml"
//! ```

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::core::files::{LOCALE_PLACEHOLDER, PathPattern};
use crate::utils::normalize_path;

pub const DEFAULT_REFERENCE_LOCALE: &str = "en-US";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Variables available as `{name}` inside path patterns.
pub type Env = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Project configuration not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// A `{name}` placeholder has no value in the environment.
    #[error("Unknown variable '{{{name}}}' in path \"{pattern}\"")]
    UnknownVariable { name: String, pattern: String },
    /// The reference and l10n patterns of a rule cannot be mapped onto each other.
    #[error(
        "Wildcards in reference \"{reference}\" do not match wildcards in l10n \"{l10n}\""
    )]
    WildcardMismatch { reference: String, l10n: String },
    /// The reference pattern of a rule depends on the locale.
    #[error("Reference path \"{0}\" must not contain {{locale}}")]
    LocaleInReference(String),
    /// A configuration includes itself, directly or indirectly.
    #[error("Include cycle detected at {}", .0.display())]
    IncludeCycle(PathBuf),
}

#[derive(Debug, Deserialize)]
struct ProjectToml {
    #[serde(default = "default_basepath")]
    basepath: String,
    #[serde(default)]
    locales: Vec<String>,
    #[serde(default)]
    env: Env,
    #[serde(default)]
    paths: Vec<PathEntry>,
    #[serde(default)]
    includes: Vec<IncludeEntry>,
}

#[derive(Debug, Deserialize)]
struct PathEntry {
    reference: String,
    l10n: String,
    #[serde(default)]
    locales: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct IncludeEntry {
    path: String,
}

fn default_basepath() -> String {
    ".".to_string()
}

/// The environment every configuration starts from.
///
/// `l10n_base` defaults to empty, so `{l10n_base}/{locale}` resolves to
/// `{locale}` directly under the project root.
pub fn default_env() -> Env {
    Env::from([("l10n_base".to_string(), String::new())])
}

/// A `[[paths]]` entry with its patterns anchored at the declaring file's root.
#[derive(Debug, Clone)]
pub struct PathRule {
    pub reference: PathPattern,
    pub l10n: PathPattern,
    /// Restricts the rule to these locales when set.
    pub locales: Option<Vec<String>>,
}

impl PathRule {
    pub fn applies_to(&self, locale: &str) -> bool {
        self.locales
            .as_ref()
            .is_none_or(|locales| locales.iter().any(|l| l == locale))
    }
}

/// A loaded project configuration, includes merged.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Base directory of the top-level configuration.
    pub root: PathBuf,
    /// Sorted union of all declared locales.
    pub all_locales: Vec<String>,
    pub rules: Vec<PathRule>,
}

impl ProjectConfig {
    /// Load a configuration file and everything it includes.
    pub fn load(path: &Path, env: &Env) -> Result<Self, ConfigError> {
        let mut loader = Loader::default();
        let root = loader.load(path, env)?;
        Ok(Self {
            root,
            all_locales: loader.locales.into_iter().collect(),
            rules: loader.rules,
        })
    }
}

#[derive(Default)]
struct Loader {
    locales: BTreeSet<String>,
    rules: Vec<PathRule>,
    visiting: HashSet<PathBuf>,
}

impl Loader {
    /// Load one file, returning its root.
    fn load(&mut self, path: &Path, parent_env: &Env) -> Result<PathBuf, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let key = normalize_path(path);
        if !self.visiting.insert(key.clone()) {
            return Err(ConfigError::IncludeCycle(key));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let project: ProjectToml =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let root = normalize_path(&config_dir.join(&project.basepath));

        let mut env = parent_env.clone();
        env.extend(project.env);

        self.locales.extend(project.locales);

        for entry in project.paths {
            let reference = PathPattern::new(&root, &expand_env(&entry.reference, &env)?);
            let l10n = PathPattern::new(&root, &expand_env(&entry.l10n, &env)?);

            if reference.contains_locale() {
                return Err(ConfigError::LocaleInReference(entry.reference));
            }
            if reference.wildcards() != l10n.wildcards() {
                return Err(ConfigError::WildcardMismatch {
                    reference: entry.reference,
                    l10n: entry.l10n,
                });
            }

            self.rules.push(PathRule {
                reference,
                l10n,
                locales: entry.locales,
            });
        }

        for include in project.includes {
            let include_path = config_dir.join(expand_env(&include.path, &env)?);
            self.load(&include_path, &env)?;
        }

        self.visiting.remove(&key);
        Ok(root)
    }
}

/// Replace `{name}` placeholders with values from `env`, leaving `{locale}` in place.
///
/// Separators that follow empty leading variables are dropped, so
/// `{l10n_base}/{locale}` stays relative when `l10n_base` is empty. A path
/// is only absolute if it is written that way or a variable's value is.
fn expand_env(pattern: &str, env: &Env) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(pattern.len());
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(pattern) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let name = &caps[1];
        push_literal(&mut expanded, &pattern[last..whole.start], last > 0);

        if &caps[0] == LOCALE_PLACEHOLDER {
            expanded.push_str(&caps[0]);
        } else {
            let value = env.get(name).ok_or_else(|| ConfigError::UnknownVariable {
                name: name.to_string(),
                pattern: pattern.to_string(),
            })?;
            expanded.push_str(value);
        }
        last = whole.end;
    }

    push_literal(&mut expanded, &pattern[last..], last > 0);
    Ok(expanded)
}

fn push_literal(expanded: &mut String, literal: &str, after_variable: bool) {
    if after_variable && expanded.is_empty() {
        expanded.push_str(literal.trim_start_matches('/'));
    } else {
        expanded.push_str(literal);
    }
}
