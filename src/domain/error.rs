use thiserror::Error;

/// Classified failures surfaced to the caller of the translation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Nothing to translate")]
    EmptyInput,

    #[error("Translation provider rate limit reached")]
    RateLimited,

    #[error("Translation provider unavailable (status {0})")]
    ServerUnavailable(u16),

    #[error("Unsupported language pair: {0}")]
    UnsupportedLanguagePair(String),

    #[error("Network error: {0}")]
    NetworkFailure(String),

    #[error("Translation failed: {0}")]
    TranslationUnavailable(String),
}

impl TranslateError {
    /// Message shown to the end user, in the product's UI language.
    pub fn user_message(&self) -> &'static str {
        match self {
            TranslateError::RateLimited => "API kullanım limiti aşıldı. Lütfen biraz bekleyin.",
            TranslateError::NetworkFailure(_) => {
                "İnternet bağlantısı hatası. Lütfen bağlantınızı kontrol edin."
            }
            TranslateError::ServerUnavailable(_) => {
                "Çeviri servisi şu anda kullanılamıyor. Lütfen daha sonra tekrar deneyin."
            }
            TranslateError::UnsupportedLanguagePair(_) => "Desteklenmeyen dil çifti.",
            TranslateError::EmptyInput | TranslateError::TranslationUnavailable(_) => {
                "Çeviri sırasında bir hata oluştu."
            }
        }
    }
}

/// Failures reported by a provider adapter before any classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    #[error("Provider returned HTTP {0}")]
    Status(u16),

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() || e.is_body() {
            TransportError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Unreachable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Malformed(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum KelimeError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_distinct_per_kind() {
        assert_ne!(
            TranslateError::RateLimited.user_message(),
            TranslateError::ServerUnavailable(503).user_message()
        );
        assert_eq!(
            TranslateError::UnsupportedLanguagePair("xx|yy".into()).user_message(),
            "Desteklenmeyen dil çifti."
        );
        assert_eq!(
            TranslateError::EmptyInput.user_message(),
            TranslateError::TranslationUnavailable(String::new()).user_message()
        );
    }
}
