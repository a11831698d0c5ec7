use crate::application::aggregate::aggregate;
use crate::application::examples::ExampleResolver;
use crate::domain::error::{TranslateError, TransportError};
use crate::domain::model::{ProviderMatch, ProviderReply, TranslationResult};
use crate::domain::traits::TranslationProvider;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "tr";

/// Entry point of the engine: translate, classify, aggregate, enrich.
///
/// Holds no per-request state, so one engine can serve concurrent calls.
pub struct TranslationEngine {
    provider: Arc<dyn TranslationProvider>,
    examples: Option<ExampleResolver>,
}

impl TranslationEngine {
    pub fn new(provider: Arc<dyn TranslationProvider>, examples: ExampleResolver) -> Self {
        Self {
            provider,
            examples: Some(examples),
        }
    }

    /// Engine that never contacts an example corpus.
    pub fn without_examples(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            examples: None,
        }
    }

    pub async fn translate_default(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.translate(text, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG).await
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        debug!(
            "Translating '{}' ({}|{}) via {}",
            text,
            source_lang,
            target_lang,
            self.provider.provider_name()
        );

        let reply = self
            .provider
            .lookup(text, source_lang, target_lang)
            .await
            .map_err(from_transport)?;
        let (translated, matches) = classify_reply(reply)?;

        let examples = match &self.examples {
            Some(resolver) => {
                resolver
                    .resolve_with_target(text, source_lang, target_lang)
                    .await
            }
            None => Vec::new(),
        };

        let ranked = aggregate(&translated, &matches);
        debug!(
            "Primary '{}' with {} alternatives, {} examples",
            ranked.primary.text,
            ranked.alternatives.len(),
            examples.len()
        );

        Ok(TranslationResult {
            text: ranked.primary.text,
            examples,
            alternatives: ranked.alternatives,
            original_text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        })
    }
}

/// Accept a success reply or turn it into a classified error.
///
/// Returns the translated text and its bundled matches.
pub fn classify_reply(
    reply: ProviderReply,
) -> Result<(String, Vec<ProviderMatch>), TranslateError> {
    let status = reply.status.ok_or_else(|| {
        TranslateError::TranslationUnavailable("reply carried no status".to_string())
    })?;

    if !(200..300).contains(&status) {
        return Err(classify_status(status, reply.message.as_deref()));
    }

    // MyMemory answers an exhausted quota with 200 and a warning as "translation"
    if reply.quota_finished {
        return Err(TranslateError::RateLimited);
    }

    match reply.translated_text {
        Some(text) if !text.trim().is_empty() => Ok((text, reply.matches)),
        _ => Err(TranslateError::TranslationUnavailable(
            "reply carried no translated text".to_string(),
        )),
    }
}

/// Map a non-success provider status to an error kind.
pub fn classify_status(status: u16, message: Option<&str>) -> TranslateError {
    let message = message.unwrap_or_default();
    match status {
        403 | 429 => TranslateError::RateLimited,
        s if s >= 500 => TranslateError::ServerUnavailable(s),
        _ if message.to_lowercase().contains("language") => {
            TranslateError::UnsupportedLanguagePair(message.to_string())
        }
        s => TranslateError::TranslationUnavailable(if message.is_empty() {
            format!("provider status {}", s)
        } else {
            format!("provider status {}: {}", s, message)
        }),
    }
}

fn from_transport(e: TransportError) -> TranslateError {
    match e {
        TransportError::Unreachable(msg) => TranslateError::NetworkFailure(msg),
        TransportError::Status(status) => classify_status(status, None),
        TransportError::Malformed(msg) => TranslateError::TranslationUnavailable(msg),
    }
}
