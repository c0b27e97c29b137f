//! Key-attribute extraction: model numbers, brands and product series.

use super::normalize::tokens;
use crate::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

/// Model numbers are digit runs of this many digits, e.g. `4090`, `13900`.
const MODEL_NUMBER_DIGITS: std::ops::RangeInclusive<usize> = 3..=5;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern must compile"));

/// Pulls high-confidence identifiers out of already normalized text.
///
/// Returns, in discovery order:
/// 1. Every maximal digit run whose length is 3 to 5 (longer runs are not split)
/// 2. Brand words from the vocabulary that appear as whole words
/// 3. Product-series words from the vocabulary that appear as whole words
///
/// Hits borrow from `normalized`. Duplicates are possible and harmless.
pub fn extract_key_info<'a>(normalized: &'a str, vocabulary: &Vocabulary) -> Vec<&'a str> {
    let mut hits: Vec<&'a str> = DIGIT_RUN
        .find_iter(normalized)
        .map(|m| m.as_str())
        .filter(|digits| MODEL_NUMBER_DIGITS.contains(&digits.len()))
        .collect();

    let words = tokens(normalized);
    for term in vocabulary.brands().iter().chain(vocabulary.series()) {
        if let Some(word) = words.iter().copied().find(|word| *word == term.as_str()) {
            hits.push(word);
        }
    }

    hits
}
