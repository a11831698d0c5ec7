use crate::domain::error::TransportError;
use crate::domain::model::{ProviderMatch, ProviderReply, MAX_QUALITY};
use crate::domain::traits::TranslationProvider;
use crate::infrastructure::config::ProvidersConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

// MyMemory API response structures
#[derive(Deserialize, Debug)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    #[serde(rename = "responseStatus")]
    response_status: Option<LooseNumber>,
    #[serde(rename = "responseDetails")]
    response_details: Option<Value>,
    #[serde(rename = "quotaFinished")]
    quota_finished: Option<bool>,
    matches: Option<MatchList>,
}

// Error replies send `"matches": ""` instead of a list
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum MatchList {
    List(Vec<MyMemoryMatch>),
    Other(Value),
}

impl MatchList {
    fn into_vec(self) -> Vec<MyMemoryMatch> {
        match self {
            MatchList::List(matches) => matches,
            MatchList::Other(_) => Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MyMemoryMatch {
    translation: Option<String>,
    quality: Option<LooseNumber>,
}

// MyMemory sends numbers either as JSON numbers or as numeric strings
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    fn as_i64(&self) -> Option<i64> {
        match self {
            LooseNumber::Int(n) => Some(*n),
            LooseNumber::Float(f) if f.is_finite() => Some(f.round() as i64),
            LooseNumber::Float(_) => None,
            LooseNumber::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
            }
        }
    }
}

/// MyMemory translation memory client
pub struct MyMemoryProvider {
    client: Client,
    url: String,
    email: Option<String>,
}

impl MyMemoryProvider {
    pub fn new(client: Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            url: config.mymemory_url.clone(),
            email: config.email.clone().filter(|e| !e.is_empty()),
        }
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn lookup(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<ProviderReply, TransportError> {
        let langpair = format!("{}|{}", source_lang, target_lang);
        let mut params = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = &self.email {
            params.push(("de", email.as_str()));
        }

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        debug!("MyMemory answered HTTP {} ({} bytes)", status, body.len());
        parse_reply(status, &body)
    }

    fn provider_name(&self) -> &str {
        "MyMemory"
    }
}

/// Decode a MyMemory body. A body that is not JSON is only an error when the
/// HTTP status claimed success; otherwise the HTTP status is reported.
pub fn parse_reply(http_status: u16, body: &str) -> Result<ProviderReply, TransportError> {
    let response = match serde_json::from_str::<MyMemoryResponse>(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&http_status) => {
            return Ok(ProviderReply::failure(http_status, body.trim()));
        }
        Err(e) => return Err(e.into()),
    };

    let status = response
        .response_status
        .as_ref()
        .and_then(LooseNumber::as_i64)
        .and_then(|s| u16::try_from(s).ok())
        .unwrap_or(http_status);

    let message = match response.response_details {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::String(_)) | Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };

    let matches = response
        .matches
        .map(MatchList::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(|m| ProviderMatch {
            translation: m.translation,
            quality: m
                .quality
                .as_ref()
                .and_then(LooseNumber::as_i64)
                .map(|q| q.clamp(0, MAX_QUALITY as i64) as u8),
        })
        .collect();

    Ok(ProviderReply {
        status: Some(status),
        message,
        quota_finished: response.quota_finished.unwrap_or(false),
        translated_text: response.response_data.and_then(|d| d.translated_text),
        matches,
    })
}
