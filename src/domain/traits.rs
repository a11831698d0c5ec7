use crate::domain::error::TransportError;
use crate::domain::model::{CorpusEntry, CorpusQuery, ProviderReply};
use async_trait::async_trait;

/// Trait for primary translation providers
///
/// Implementations only fetch and decode. Status classification happens in
/// the engine, so a provider reports non-success replies as `Ok`.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn lookup(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderReply, TransportError>;

    fn provider_name(&self) -> &str;
}

/// Trait for example-sentence corpora
#[async_trait]
pub trait ExampleCorpus: Send + Sync {
    /// Search sentences containing `query.term`, in provider order
    async fn search(&self, query: &CorpusQuery) -> Result<Vec<CorpusEntry>, TransportError>;

    fn corpus_name(&self) -> &str;
}
