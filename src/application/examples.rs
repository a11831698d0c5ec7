use crate::application::normalize::canonicalize_for_display;
use crate::domain::model::{CorpusEntry, CorpusQuery, ExampleSentence};
use crate::domain::traits::ExampleCorpus;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Most example sentences returned per request.
pub const MAX_EXAMPLES: usize = 3;

const DEFAULT_CORPUS_LANG: &str = "eng";

// ISO 639-1 -> corpus (ISO 639-3) codes
static CORPUS_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "eng"),
        ("tr", "tur"),
        ("de", "deu"),
        ("fr", "fra"),
        ("es", "spa"),
        ("it", "ita"),
        ("pt", "por"),
        ("nl", "nld"),
        ("ru", "rus"),
        ("pl", "pol"),
        ("ja", "jpn"),
        ("zh", "cmn"),
        ("ko", "kor"),
        ("ar", "ara"),
    ])
});

/// Map a language code such as `en` or `pt-BR` to the corpus code.
/// Unknown languages fall back to English.
pub fn corpus_language(code: &str) -> &'static str {
    let base = code
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    CORPUS_LANGUAGES
        .get(base.as_str())
        .copied()
        .unwrap_or(DEFAULT_CORPUS_LANG)
}

/// Fetches example sentences for a term, never failing.
///
/// Corpus errors and empty answers are logged and replaced by
/// [`synthesize_examples`], so a non-empty term always yields examples.
pub struct ExampleResolver {
    corpus: Arc<dyn ExampleCorpus>,
    target_lang: String,
}

impl ExampleResolver {
    pub fn new(corpus: Arc<dyn ExampleCorpus>, target_lang: impl Into<String>) -> Self {
        Self {
            corpus,
            target_lang: target_lang.into(),
        }
    }

    /// Examples for `term`, paired with the configured target language.
    pub async fn resolve(&self, term: &str, source_lang: &str) -> Vec<ExampleSentence> {
        self.resolve_with_target(term, source_lang, &self.target_lang).await
    }

    pub async fn resolve_with_target(
        &self,
        term: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Vec<ExampleSentence> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let query = CorpusQuery {
            term: term.to_string(),
            from: corpus_language(source_lang).to_string(),
            to: corpus_language(target_lang).to_string(),
            limit: MAX_EXAMPLES,
        };

        let entries = match self.corpus.search(&query).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "{} lookup for '{}' failed, using default examples: {}",
                    self.corpus.corpus_name(),
                    term,
                    e
                );
                return synthesize_examples(term, target_lang);
            }
        };

        let examples = select_examples(term, &entries);
        if examples.is_empty() {
            warn!(
                "No suitable examples for '{}' among {} entries, using default examples",
                term,
                entries.len()
            );
            return synthesize_examples(term, target_lang);
        }

        debug!("Found {} corpus examples for '{}'", examples.len(), term);
        examples
    }
}

/// Keep entries that mention `term` as a whole word and carry a translation.
pub fn select_examples(term: &str, entries: &[CorpusEntry]) -> Vec<ExampleSentence> {
    let Some(pattern) = whole_word_pattern(term) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let original = entry.text.as_deref()?;
            if !pattern.is_match(original) {
                return None;
            }
            let translation = entry.translations.as_ref()?.first_text()?;
            Some(ExampleSentence::new(
                canonicalize_for_display(original),
                canonicalize_for_display(translation),
            ))
        })
        .take(MAX_EXAMPLES)
        .collect()
}

/// Case-insensitive whole-word matcher for `term`.
///
/// Both ends are anchored with `\b`, so a term that starts or ends with a
/// non-word character ("c++", "hello!") never matches and the resolver falls
/// back to synthesized examples.
pub fn whole_word_pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).ok()
}

/// Deterministic examples used when the corpus has nothing usable.
///
/// Targets without templates get the English sentences only.
pub fn synthesize_examples(term: &str, target_lang: &str) -> Vec<ExampleSentence> {
    let originals = [
        format!("The word '{term}' is commonly used in everyday conversations."),
        format!("Many people use '{term}' when they want to express this concept."),
        format!("In business contexts, '{term}' often appears in professional communications."),
    ];
    let translations = template_translations(term, target_lang);

    originals
        .iter()
        .enumerate()
        .map(|(i, original)| {
            let original = canonicalize_for_display(original);
            match &translations {
                Some(t) => ExampleSentence::new(original, canonicalize_for_display(&t[i])),
                None => ExampleSentence::original_only(original),
            }
        })
        .collect()
}

fn template_translations(term: &str, target_lang: &str) -> Option<[String; 3]> {
    match corpus_language(target_lang) {
        "tur" => Some([
            format!("'{term}' kelimesi günlük konuşmalarda sıkça kullanılır."),
            format!("Birçok insan bu kavramı ifade etmek istediğinde '{term}' kullanır."),
            format!("İş bağlamında, '{term}' genellikle profesyonel iletişimde kullanılır."),
        ]),
        _ => None,
    }
}
