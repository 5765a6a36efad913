//! Data types passed between the pipeline stages.
//!
//! - `translation`: CompositeKey and TranslationTable (extraction output)
//! - `experiment`: ExperimentRecord (reshape output, serialized as JSON)

pub mod experiment;
pub mod translation;

pub use experiment::{ExperimentRecord, Experiments};
pub use translation::{CompositeKey, LocaleTranslations, TranslationTable};
