//! Relevance scoring between one listing title and a query.
//!
//! Scores are on a 0–100 scale built from a base match tier plus two bonuses:
//! - 100: Normalized title equals the normalized query
//! - 90: Title contains the query
//! - 80: Title contains one of the query expansions
//! - up to 70: Token coverage between the title and the best expansion
//! - +20 × fraction of query key attributes (model numbers, brands, series) found in the title
//! - +10 when every query token appears somewhere in the title
//!
//! The total is clamped to 100. The tier weights come from [`RankingConfig`].

use super::expand::Expansions;
use super::extract::extract_key_info;
use super::normalize::{normalize, tokens};
use crate::config::RankingConfig;
use crate::vocabulary::Vocabulary;

/// Scores `title` against `query` using precomputed `expansions`.
///
/// Uses the built-in vocabulary and default ranking constants. The expansions
/// are only borrowed. When scoring many titles against one query, build a
/// [`PreparedQuery`](super::PreparedQuery) once instead.
pub fn score(title: &str, query: &str, expansions: &Expansions) -> f64 {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return 0.0;
    }

    let vocabulary = Vocabulary::builtin();
    let query_keys = extract_key_info(&normalized, &vocabulary);
    score_normalized_query(
        title,
        &QueryTerms {
            normalized: &normalized,
            expansions,
            key_info: query_keys.as_slice(),
        },
        &vocabulary,
        &RankingConfig::default(),
    )
}

/// Borrowed view of a non-empty normalized query and what was derived from it.
pub(crate) struct QueryTerms<'a, K> {
    pub normalized: &'a str,
    pub expansions: &'a Expansions,
    pub key_info: &'a [K],
}

/// Scores a raw listing title against prepared query terms, on the
/// `0..=max_score` scale.
pub(crate) fn score_normalized_query<K: AsRef<str>>(
    title: &str,
    query: &QueryTerms<'_, K>,
    vocabulary: &Vocabulary,
    config: &RankingConfig,
) -> f64 {
    let title = normalize(title);

    let base = if title == query.normalized {
        config.exact_match
    } else if title.contains(query.normalized) {
        config.substring_match
    } else {
        best_expansion_score(&title, query.expansions, config)
    };

    let mut bonus = 0.0;

    let title_keys = extract_key_info(&title, vocabulary);
    if let Some(fraction) = key_attribute_fraction(query.key_info, title_keys.as_slice()) {
        bonus += fraction * config.key_attribute_bonus;
    }

    if covers_all_tokens(&title, query.normalized) {
        bonus += config.full_coverage_bonus;
    }

    (base + bonus).min(config.max_score)
}

/// Best score over all expansions: a substring hit, or else token coverage.
fn best_expansion_score(title: &str, expansions: &Expansions, config: &RankingConfig) -> f64 {
    let title_tokens = tokens(title);
    expansions
        .iter()
        .map(|variant| {
            if title.contains(variant.as_str()) {
                config.expansion_match
            } else {
                token_coverage(&title_tokens, variant) * config.token_coverage
            }
        })
        .fold(0.0, f64::max)
}

/// Fraction of `variant` tokens that overlap some title token, over the larger
/// of the two token counts.
///
/// A variant token overlaps a title token when either contains the other, so
/// "4070" overlaps "4070ti" and "rtx" overlaps "rtx4070".
pub(crate) fn token_coverage(title_tokens: &[&str], variant: &str) -> f64 {
    let variant_tokens: Vec<&str> = variant.split_whitespace().collect();
    let denominator = variant_tokens.len().max(title_tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let matches = variant_tokens
        .iter()
        .filter(|&&v| {
            title_tokens
                .iter()
                .any(|&t| t.contains(v) || v.contains(t))
        })
        .count();

    matches as f64 / denominator as f64
}

/// Fraction of query key attributes matched by a title key attribute.
///
/// Returns `None` when the query has no key attributes, in which case no bonus
/// applies at all.
pub(crate) fn key_attribute_fraction<Q, T>(query_keys: &[Q], title_keys: &[T]) -> Option<f64>
where
    Q: AsRef<str>,
    T: AsRef<str>,
{
    if query_keys.is_empty() {
        return None;
    }

    let matches = query_keys
        .iter()
        .filter(|q| {
            let q: &str = q.as_ref();
            title_keys.iter().any(|t| {
                let t: &str = t.as_ref();
                t == q || t.contains(q) || q.contains(t)
            })
        })
        .count();

    Some(matches as f64 / query_keys.len() as f64)
}

/// Whether every space-separated query token occurs as a substring of the title.
///
/// An empty query never counts as covered.
pub(crate) fn covers_all_tokens(title: &str, normalized_query: &str) -> bool {
    let mut query_tokens = normalized_query.split_whitespace().peekable();
    query_tokens.peek().is_some() && query_tokens.all(|token| title.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::expand::expand;
    use crate::search::query::PreparedQuery;
    use assert2::check;
    use rstest::rstest;

    fn score_builtin(title: &str, query: &str) -> f64 {
        let expansions = expand(query, &Vocabulary::builtin());
        score(title, query, &expansions)
    }

    #[rstest]
    #[case(&["placa", "de", "video", "rtx", "4060"], "rtx 4060", 2.0 / 5.0)]
    #[case(&["rtx4070"], "rtx", 1.0)]
    #[case(&["monitor", "27"], "gpu", 0.0)]
    #[case(&[], "gpu", 0.0)]
    #[case(&[], "", 0.0)]
    fn test_token_coverage(#[case] title: &[&str], #[case] variant: &str, #[case] expected: f64) {
        check!((token_coverage(title, variant) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_key_attribute_fraction() {
        check!(key_attribute_fraction::<&str, &str>(&[], &["4090"]).is_none());
        check!(key_attribute_fraction(&["4090", "rtx"], &["4090", "nvidia", "rtx"]) == Some(1.0));
        check!(key_attribute_fraction(&["4090", "rtx"], &["4080", "rtx"]) == Some(0.5));
        check!(key_attribute_fraction(&["4090"], &["4080"]) == Some(0.0));
    }

    #[rstest]
    #[case("placa de video rtx 4070", "rtx 4070", true)]
    #[case("placa de video rtx 4070", "4070 video", true)]
    #[case("placa de video rtx 4070", "rtx 4090", false)]
    #[case("placa de video rtx 4070", "", false)]
    fn test_covers_all_tokens(#[case] title: &str, #[case] query: &str, #[case] expected: bool) {
        check!(covers_all_tokens(title, query) == expected);
    }

    #[rstest]
    #[case("RTX 4070", "rtx 4070", 100.0)] // exact
    #[case("Placa de Vídeo AMD RX 7600 8GB GDDR6", "placa de video", 100.0)] // 90 + 10 coverage
    #[case("Hollow Knight - Steam", "hollow knight", 100.0)] // 90 + 10 coverage
    #[case("Placa de Vídeo RTX 4060 8GB GDDR6 - ASUS", "GPU", 80.0)] // alias "placa de video"
    #[case("Monitor 27\" Gamer 144Hz Full HD 1ms", "GPU", 0.0)]
    #[case("", "rtx 4070", 0.0)]
    fn test_score_tiers(#[case] title: &str, #[case] query: &str, #[case] expected: f64) {
        check!((score_builtin(title, query) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case("rtx 4070")]
    #[case("GPU")]
    #[case("ryzen 5600")]
    #[case("placa de video")]
    fn test_free_score_agrees_with_prepared_query(#[case] query: &str) {
        let prepared =
            PreparedQuery::new(query, Vocabulary::builtin(), RankingConfig::default());
        for title in [
            "Placa de Vídeo NVIDIA GeForce RTX 4070 Ti 12GB",
            "Processador AMD Ryzen 5 5600 3.5GHz",
            "Monitor 27\" Gamer 144Hz Full HD 1ms",
            "",
        ] {
            check!(score_builtin(title, query) == prepared.score(title), "title {title:?}");
        }
    }

    #[test]
    fn test_free_score_borrows_expansions() {
        let expansions = expand("rtx 4070", &Vocabulary::builtin());
        let before = expansions.clone();
        let value = score("Placa GeForce RTX 4070", "rtx 4070", &expansions);
        check!(value >= 80.0);
        check!(expansions == before);
        check!(score("RTX 4070", "?!", &expansions) == 0.0);
    }

    #[test]
    fn test_key_attribute_bonus_lifts_model_number() {
        // No substring or alias hit: only token coverage plus the model bonus
        let with_model = score_builtin("Placa de Video GeForce 4090 24GB", "rtx4090");
        let without_model = score_builtin("Placa de Video GeForce 4080 16GB", "rtx4090");
        check!(with_model > without_model);
    }

    #[test]
    fn test_fuzzy_score_is_bounded() {
        // "ryzen" covers one of two title tokens: 1/2 × 70, plus the series bonus
        let value = score_builtin("ryzen box", "ryzen cooler");
        check!(value > 0.0);
        check!(value <= 100.0);
    }
}
