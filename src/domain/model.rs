use serde::{Deserialize, Serialize};

// 一个候选译文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCandidate {
    pub text: String,
    pub quality: u8, // 0-100
}

impl TranslationCandidate {
    pub fn new(text: impl Into<String>, quality: u8) -> Self {
        Self {
            text: text.into(),
            quality: quality.min(MAX_QUALITY),
        }
    }
}

/// Quality assigned to the provider's direct answer.
pub const MAX_QUALITY: u8 = 100;

// 例句
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub original: String,
    /// `None` when no counterpart exists in the target language (degraded mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl ExampleSentence {
    pub fn new(original: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: Some(translation.into()),
        }
    }

    pub fn original_only(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: None,
        }
    }
}

// 聚合结果：主译文 + 最多两个备选
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedCandidates {
    pub primary: TranslationCandidate,
    pub alternatives: Vec<TranslationCandidate>,
}

// 最终返回给调用方的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub text: String,
    pub examples: Vec<ExampleSentence>,
    pub alternatives: Vec<TranslationCandidate>,
    pub original_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// One alternative match bundled with a primary provider reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderMatch {
    pub translation: Option<String>,
    pub quality: Option<u8>,
}

impl ProviderMatch {
    pub fn new(translation: impl Into<String>, quality: u8) -> Self {
        Self {
            translation: Some(translation.into()),
            quality: Some(quality),
        }
    }
}

/// Primary provider reply, decoded but not yet classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub quota_finished: bool,
    pub translated_text: Option<String>,
    pub matches: Vec<ProviderMatch>,
}

impl ProviderReply {
    pub fn success(translated_text: impl Into<String>) -> Self {
        Self {
            status: Some(200),
            translated_text: Some(translated_text.into()),
            ..Self::default()
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_matches(mut self, matches: Vec<ProviderMatch>) -> Self {
        self.matches = matches;
        self
    }
}

// 例句语料库查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusQuery {
    pub term: String,
    pub from: String, // 语料库语言代码, 如 eng
    pub to: String,
    pub limit: usize,
}

/// Translation field of a corpus entry. Providers nest it at varying depth.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NestedTranslation {
    Sentence { text: Option<String> },
    Group(Vec<NestedTranslation>),
    Other(serde_json::Value),
}

impl NestedTranslation {
    /// First non-empty sentence text reachable by following first elements.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            NestedTranslation::Sentence { text } => {
                text.as_deref().filter(|t| !t.trim().is_empty())
            }
            NestedTranslation::Group(items) => items.first().and_then(|i| i.first_text()),
            NestedTranslation::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorpusEntry {
    pub text: Option<String>,
    pub translations: Option<NestedTranslation>,
}
