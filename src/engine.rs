//! Search engine entry points.
//!
//! [`SearchEngine`] bundles a vocabulary with ranking constants. The free
//! [`search_and_score`] function runs against a process-wide default engine
//! built from the embedded vocabulary.

use crate::config::{RankingConfig, read_config_file};
use crate::error::Result;
use crate::search::{PreparedQuery, rank};
use crate::types::{Listing, ScoredListing};
use crate::vocabulary::Vocabulary;
use std::{
    path::Path,
    sync::{Arc, LazyLock},
};

static DEFAULT_ENGINE: LazyLock<SearchEngine> = LazyLock::new(SearchEngine::default);

/// Ranks `listings` against `query` with the built-in vocabulary and default
/// ranking constants.
///
/// A query with nothing to match on (empty, or only whitespace and punctuation
/// such as `"!!!"`) returns every listing in input order with the neutral
/// score 1. Otherwise listings scoring at or below 15 are dropped
/// and the rest come back sorted by descending `search_score`.
pub fn search_and_score<L: Listing + Clone>(listings: &[L], query: &str) -> Vec<ScoredListing<L>> {
    DEFAULT_ENGINE.search_and_score(listings, query)
}

/// Immutable search configuration; cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    vocabulary: Arc<Vocabulary>,
    config: RankingConfig,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::builtin(),
            config: RankingConfig::default(),
        }
    }
}

impl SearchEngine {
    /// Creates an engine after validating `config`.
    pub fn new(vocabulary: Arc<Vocabulary>, config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { vocabulary, config })
    }

    /// Builds an engine from one TOML document holding `[aliases]`, optional
    /// `[attributes]` and optional `[ranking]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let vocabulary = Vocabulary::from_toml_str(source)?;
        let config = RankingConfig::from_toml_str(source)?;
        Self::new(Arc::new(vocabulary), config)
    }

    /// Reads an engine configuration file. See [`SearchEngine::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = read_config_file(path)?;
        let engine = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            entries = engine.vocabulary.len(),
            floor = engine.config.relevance_floor,
            "Loaded search engine configuration"
        );
        Ok(engine)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Normalizes, expands and extracts key attributes from `query` once.
    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, Arc::clone(&self.vocabulary), self.config)
    }

    /// Filters and ranks `listings` against `query`. See [`search_and_score`].
    pub fn search_and_score<L: Listing + Clone>(
        &self,
        listings: &[L],
        query: &str,
    ) -> Vec<ScoredListing<L>> {
        rank(listings, &self.prepare(query))
    }

    /// Like [`SearchEngine::search_and_score`], keeping at most `limit` results.
    pub fn search_top<L: Listing + Clone>(
        &self,
        listings: &[L],
        query: &str,
        limit: usize,
    ) -> Vec<ScoredListing<L>> {
        let mut results = self.search_and_score(listings, query);
        results.truncate(limit);
        results
    }
}
