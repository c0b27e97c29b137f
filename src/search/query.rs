//! Per-query state computed once and reused for every listing.

use super::expand::{Expansions, expand};
use super::extract::extract_key_info;
use super::normalize::normalize;
use super::scoring::{QueryTerms, score_normalized_query};
use crate::config::RankingConfig;
use crate::vocabulary::Vocabulary;
use std::sync::Arc;

/// A query ready to score listing titles.
///
/// Holds the normalized query, its expansions and its key attributes so that
/// scoring a title only has to normalize and tokenize the title itself.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    expansions: Expansions,
    key_info: Vec<String>,
    vocabulary: Arc<Vocabulary>,
    config: RankingConfig,
}

impl PreparedQuery {
    /// Normalizes and expands `query` against `vocabulary`.
    pub fn new(query: &str, vocabulary: Arc<Vocabulary>, config: RankingConfig) -> Self {
        let expansions = expand(query, &vocabulary);
        Self::with_expansions(query, expansions, vocabulary, config)
    }

    /// Builds a prepared query around expansions computed by the caller.
    pub fn with_expansions(
        query: &str,
        expansions: Expansions,
        vocabulary: Arc<Vocabulary>,
        config: RankingConfig,
    ) -> Self {
        let normalized = normalize(query);
        let key_info = extract_key_info(&normalized, &vocabulary)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        Self {
            normalized,
            expansions,
            key_info,
            vocabulary,
            config,
        }
    }

    /// True when the query carries nothing to match on (empty, whitespace or
    /// punctuation only). Such queries list everything unfiltered.
    pub fn is_pass_through(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn expansions(&self) -> &Expansions {
        &self.expansions
    }

    /// Model numbers, brands and series found in the query.
    pub fn key_info(&self) -> &[String] {
        &self.key_info
    }

    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Scores a raw listing title on the `0..=max_score` scale.
    ///
    /// A pass-through query scores every title 0; ranking handles that case
    /// before scoring.
    pub fn score(&self, title: &str) -> f64 {
        if self.is_pass_through() {
            return 0.0;
        }

        let terms = QueryTerms {
            normalized: &self.normalized,
            expansions: &self.expansions,
            key_info: self.key_info.as_slice(),
        };
        score_normalized_query(title, &terms, &self.vocabulary, &self.config)
    }
}
