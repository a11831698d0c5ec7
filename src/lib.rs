//! Translation lookup with ranked alternatives and example sentences.
//!
//! [`TranslationEngine`] asks a primary provider for a translation, folds its
//! bundled matches into at most two de-duplicated alternatives, and enriches
//! the answer with up to three example sentences from a corpus. Corpus
//! failures never fail a translation; deterministic examples are
//! synthesized instead.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::translate::TranslationEngine;
pub use domain::error::{KelimeError, TranslateError};
pub use domain::model::{ExampleSentence, TranslationCandidate, TranslationResult};
