//! In-memory providers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use kelime::domain::error::TransportError;
use kelime::domain::model::{CorpusEntry, CorpusQuery, NestedTranslation, ProviderReply};
use kelime::domain::traits::{ExampleCorpus, TranslationProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct StubProvider {
    answer: Result<ProviderReply, TransportError>,
    pub calls: AtomicUsize,
}

impl StubProvider {
    pub fn replying(reply: ProviderReply) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(reply),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl TranslationProvider for StubProvider {
    async fn lookup(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<ProviderReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Echoes the text with the target language appended, after a delay.
pub struct EchoProvider {
    pub delay_ms: u64,
}

#[async_trait]
impl TranslationProvider for EchoProvider {
    async fn lookup(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderReply, TransportError> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(ProviderReply::success(format!("{} {}", text, target_lang)))
    }

    fn provider_name(&self) -> &str {
        "echo"
    }
}

pub struct StubCorpus {
    answer: Result<Vec<CorpusEntry>, TransportError>,
    pub calls: AtomicUsize,
}

impl StubCorpus {
    pub fn with_entries(entries: Vec<CorpusEntry>) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(entries),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExampleCorpus for StubCorpus {
    async fn search(&self, _query: &CorpusQuery) -> Result<Vec<CorpusEntry>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    fn corpus_name(&self) -> &str {
        "stub corpus"
    }
}

/// Corpus entry whose translation sits one list deep.
pub fn entry(text: &str, translation: &str) -> CorpusEntry {
    CorpusEntry {
        text: Some(text.to_string()),
        translations: Some(NestedTranslation::Group(vec![NestedTranslation::Sentence {
            text: Some(translation.to_string()),
        }])),
    }
}
