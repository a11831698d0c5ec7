use crate::application::normalize::{canonicalize_for_display, normalize_for_comparison};
use crate::domain::model::{AggregatedCandidates, ProviderMatch, TranslationCandidate, MAX_QUALITY};
use std::collections::HashSet;

/// Most alternatives kept next to the primary translation.
pub const MAX_ALTERNATIVES: usize = 2;

/// Merge the provider's direct answer with its bundled matches.
///
/// The direct answer enters first at quality 100, so it survives
/// de-duplication and the stable sort keeps it at the head. Matches without
/// text are skipped, missing quality counts as 0. Callers must pass a
/// non-blank `primary`.
pub fn aggregate(primary: &str, matches: &[ProviderMatch]) -> AggregatedCandidates {
    let raw = std::iter::once(TranslationCandidate::new(primary, MAX_QUALITY)).chain(
        matches.iter().filter_map(|m| {
            let text = m.translation.as_deref()?;
            Some(TranslationCandidate::new(text, m.quality.unwrap_or(0)))
        }),
    );

    let mut seen = HashSet::new();
    let mut candidates: Vec<TranslationCandidate> = raw
        .filter(|c| !c.text.trim().is_empty())
        .filter(|c| seen.insert(normalize_for_comparison(&c.text)))
        .map(|c| TranslationCandidate {
            text: canonicalize_for_display(&c.text),
            quality: c.quality,
        })
        .collect();

    // sort_by is stable: ties keep provider order
    candidates.sort_by(|a, b| b.quality.cmp(&a.quality));

    let mut ranked = candidates.into_iter();
    let head = ranked.next().unwrap_or_else(|| {
        TranslationCandidate::new(canonicalize_for_display(primary), MAX_QUALITY)
    });

    AggregatedCandidates {
        primary: head,
        alternatives: ranked.take(MAX_ALTERNATIVES).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(candidates: &[TranslationCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_duplicates_collapse_into_primary() {
        let matches = vec![
            ProviderMatch::new("elma", 90),
            ProviderMatch::new("Elma", 80),
            ProviderMatch::new("meyve", 60),
        ];
        let out = aggregate("elma", &matches);

        assert_eq!(out.primary, TranslationCandidate::new("Elma", 100));
        assert_eq!(out.alternatives, vec![TranslationCandidate::new("Meyve", 60)]);
    }

    #[test]
    fn test_alternatives_capped_and_ranked() {
        let matches = vec![
            ProviderMatch::new("kitap", 40),
            ProviderMatch::new("defter", 70),
            ProviderMatch::new("cilt", 55),
            ProviderMatch::new("eser", 90),
        ];
        let out = aggregate("Kitap.", &matches);

        assert_eq!(out.primary.text, "Kitap.");
        assert_eq!(out.primary.quality, 100);
        assert_eq!(texts(&out.alternatives), vec!["Eser", "Defter"]);
    }

    #[test]
    fn test_equal_quality_keeps_provider_order() {
        let matches = vec![
            ProviderMatch::new("birinci", 50),
            ProviderMatch::new("ikinci", 50),
            ProviderMatch::new("üçüncü", 50),
        ];
        let out = aggregate("ana", &matches);
        assert_eq!(texts(&out.alternatives), vec!["Birinci", "Ikinci"]);
    }

    #[test]
    fn test_primary_outranks_full_quality_match() {
        let matches = vec![ProviderMatch::new("başka", 100)];
        let out = aggregate("asıl", &matches);
        assert_eq!(out.primary.text, "Asıl");
        assert_eq!(texts(&out.alternatives), vec!["Başka"]);
    }

    #[test]
    fn test_missing_text_and_quality() {
        let matches = vec![
            ProviderMatch {
                translation: None,
                quality: Some(99),
            },
            ProviderMatch {
                translation: Some("yedek".to_string()),
                quality: None,
            },
            ProviderMatch::new("   ", 80),
        ];
        let out = aggregate("ana", &matches);
        assert_eq!(out.alternatives, vec![TranslationCandidate::new("Yedek", 0)]);
    }

    #[test]
    fn test_punctuation_variants_deduplicated() {
        let matches = vec![
            ProviderMatch::new("Merhaba!", 85),
            ProviderMatch::new("merhaba dünya", 70),
            ProviderMatch::new("Merhaba   dünya.", 65),
        ];
        let out = aggregate("merhaba", &matches);
        assert_eq!(texts(&out.alternatives), vec!["Merhaba dünya"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let matches = vec![
            ProviderMatch::new("ELMA", 95),
            ProviderMatch::new("meyve", 60),
            ProviderMatch::new("Elma ağacı", 75),
            ProviderMatch::new("armut", 10),
        ];
        let first = aggregate("elma", &matches);

        let replay: Vec<ProviderMatch> = first
            .alternatives
            .iter()
            .map(|c| ProviderMatch::new(c.text.clone(), c.quality))
            .collect();
        let second = aggregate(&first.primary.text, &replay);

        assert_eq!(first, second);
    }

    #[test]
    fn test_alternatives_never_repeat_primary() {
        let matches: Vec<ProviderMatch> = ["su", "Su.", "SU!", "\"su\"", "sulu"]
            .iter()
            .enumerate()
            .map(|(i, t)| ProviderMatch::new(*t, 100 - i as u8))
            .collect();
        let out = aggregate("su", &matches);
        let key = normalize_for_comparison(&out.primary.text);

        assert!(out.alternatives.len() <= MAX_ALTERNATIVES);
        assert!(out
            .alternatives
            .iter()
            .all(|a| normalize_for_comparison(&a.text) != key));
        assert_eq!(texts(&out.alternatives), vec!["Sulu"]);
    }
}
