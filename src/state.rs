use crate::application::examples::ExampleResolver;
use crate::application::translate::TranslationEngine;
use crate::domain::error::KelimeError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::mymemory::MyMemoryProvider;
use crate::infrastructure::network::tatoeba::TatoebaCorpus;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<TranslationEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, KelimeError> {
        Self::with_examples(config, true)
    }

    /// `examples = false` builds an engine that never queries the corpus.
    pub fn with_examples(config: Config, examples: bool) -> Result<Self, KelimeError> {
        let http_client = create_client(&config)?;
        let provider = Arc::new(MyMemoryProvider::new(http_client.clone(), &config.providers));

        let engine = if examples && config.examples {
            let corpus = Arc::new(TatoebaCorpus::new(http_client, &config.providers));
            TranslationEngine::new(provider, ExampleResolver::new(corpus, &config.target_lang))
        } else {
            TranslationEngine::without_examples(provider)
        };

        Ok(Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        })
    }
}
