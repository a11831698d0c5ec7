use crate::domain::error::TransportError;
use crate::domain::model::{CorpusEntry, CorpusQuery};
use crate::domain::traits::ExampleCorpus;
use crate::infrastructure::config::ProvidersConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

// Tatoeba search response
#[derive(Deserialize, Debug)]
struct TatoebaResponse {
    results: Option<Vec<CorpusEntry>>,
}

/// Tatoeba sentence corpus client
pub struct TatoebaCorpus {
    client: Client,
    url: String,
}

impl TatoebaCorpus {
    pub fn new(client: Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            url: config.tatoeba_url.clone(),
        }
    }
}

#[async_trait]
impl ExampleCorpus for TatoebaCorpus {
    async fn search(&self, query: &CorpusQuery) -> Result<Vec<CorpusEntry>, TransportError> {
        let trans_filter = format!("limit:{}", query.limit);
        let params = [
            ("query", query.term.as_str()),
            ("from", query.from.as_str()),
            ("to", query.to.as_str()),
            ("trans_filter", trans_filter.as_str()),
        ];

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let entries = parse_results(&body)?;
        debug!("Tatoeba returned {} entries for '{}'", entries.len(), query.term);
        Ok(entries)
    }

    fn corpus_name(&self) -> &str {
        "Tatoeba"
    }
}

pub fn parse_results(body: &str) -> Result<Vec<CorpusEntry>, TransportError> {
    serde_json::from_str::<TatoebaResponse>(body)?
        .results
        .ok_or_else(|| TransportError::Malformed("response has no results".to_string()))
}
