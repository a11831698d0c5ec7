use crate::domain::error::TranslateError;
use crate::domain::model::TranslationResult;
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Format result as string
pub fn format_result(result: &TranslationResult, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();

    let pair = format!("[{} → {}]", result.source_lang, result.target_lang);
    let indicator = if enable_emoji {
        format!("🌐 {}", pair)
    } else {
        pair
    };
    writeln!(output, "{} {}", (theme.title)(&result.original_text), indicator).ok();

    writeln!(output).ok();
    writeln!(output, "  {}", (theme.primary)(&result.text)).ok();

    for alt in &result.alternatives {
        writeln!(
            output,
            "  {} {}",
            (theme.alternative)(&alt.text),
            (theme.quality)(&format!("({}%)", alt.quality))
        )
        .ok();
    }

    if !result.examples.is_empty() {
        writeln!(output).ok();
        let cutoff = "⸺".repeat(40);
        writeln!(output, "  {}", (theme.line)(&cutoff)).ok();

        let prefix = if enable_emoji { "≫" } else { ">" };
        for (i, example) in result.examples.iter().enumerate() {
            writeln!(
                output,
                "  {}. {}   {}",
                (theme.idx)(&(i + 1).to_string()),
                prefix,
                (theme.eg)(&example.original)
            )
            .ok();
            if let Some(translation) = &example.translation {
                writeln!(output, "        {}", (theme.eg_trans)(translation)).ok();
            }
        }
    }

    writeln!(output).ok();
    output
}

/// Format a classified error with a retry hint
pub fn format_error(error: &TranslateError, theme: &Theme, enable_emoji: bool) -> String {
    let mark = if enable_emoji { "✘ " } else { "" };
    format!(
        "{}{}\n  Tekrar denemek için komutu yeniden çalıştırın.\n",
        mark,
        (theme.error)(error.user_message())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ExampleSentence, TranslationCandidate};

    fn sample() -> TranslationResult {
        TranslationResult {
            text: "Kitap".to_string(),
            examples: vec![
                ExampleSentence::new("I read a book", "Bir kitap okudum"),
                ExampleSentence::original_only("Book a room"),
            ],
            alternatives: vec![TranslationCandidate::new("Defter", 70)],
            original_text: "book".to_string(),
            source_lang: "en".to_string(),
            target_lang: "tr".to_string(),
        }
    }

    #[test]
    fn test_format_result_contains_fields() {
        colored::control::set_override(false);
        let output = format_result(&sample(), &Theme::from_name("temp"), false);

        assert!(output.starts_with("book [en → tr]"));
        assert!(output.contains("  Kitap\n"));
        assert!(output.contains("Defter (70%)"));
        assert!(output.contains("1. >   I read a book"));
        assert!(output.contains("Bir kitap okudum"));
        assert!(output.contains("2. >   Book a room"));
        assert!(!output.contains('≫'));
    }

    #[test]
    fn test_format_result_emoji() {
        colored::control::set_override(false);
        let output = format_result(&sample(), &Theme::from_name("wudao"), true);
        assert!(output.contains("🌐 [en → tr]"));
        assert!(output.contains('≫'));
    }

    #[test]
    fn test_format_error_uses_user_message() {
        colored::control::set_override(false);
        let output = format_error(&TranslateError::RateLimited, &Theme::from_name("temp"), false);
        assert!(output.starts_with("API kullanım limiti aşıldı."));
        assert!(output.contains("Tekrar denemek"));
    }
}
