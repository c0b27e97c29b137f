//! Ranking constants for the relevance scorer and result filter.
//!
//! The defaults were tuned by hand against real storefront titles and are kept
//! exactly as tuned; a host can still override them through a `[ranking]` table.

use crate::error::{Result, SearchError};
use serde::Deserialize;
use std::path::Path;

/// Score weights, relevance floor and pass-through score.
///
/// All scores live on a `0..=max_score` scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    /// Normalized title equals the normalized query.
    pub exact_match: f64,
    /// Normalized title contains the normalized query.
    pub substring_match: f64,
    /// Normalized title contains one of the query expansions.
    pub expansion_match: f64,
    /// Weight applied to the token-coverage fraction when no substring matches.
    pub token_coverage: f64,
    /// Weight applied to the fraction of query key attributes found in the title.
    pub key_attribute_bonus: f64,
    /// Flat bonus when every query token occurs in the title.
    pub full_coverage_bonus: f64,
    /// Upper clamp for the final score.
    pub max_score: f64,
    /// Results scoring at or below this value are dropped.
    pub relevance_floor: f64,
    /// Score given to every listing when the query is empty.
    pub pass_through_score: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            exact_match: 100.0,
            substring_match: 90.0,
            expansion_match: 80.0,
            token_coverage: 70.0,
            key_attribute_bonus: 20.0,
            full_coverage_bonus: 10.0,
            max_score: 100.0,
            relevance_floor: 15.0,
            pass_through_score: 1.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RankingDocument {
    #[serde(default)]
    ranking: RankingConfig,
}

impl RankingConfig {
    /// Reads the optional `[ranking]` table of a TOML document.
    ///
    /// Other tables (such as `[aliases]`) are ignored, so one file can carry both
    /// the vocabulary and the ranking overrides.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: RankingDocument = toml::from_str(source)?;
        document.ranking.validate()?;
        Ok(document.ranking)
    }

    /// Checks that every weight is a finite non-negative number and that the
    /// floor and pass-through score sit on the score scale.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("exact_match", self.exact_match),
            ("substring_match", self.substring_match),
            ("expansion_match", self.expansion_match),
            ("token_coverage", self.token_coverage),
            ("key_attribute_bonus", self.key_attribute_bonus),
            ("full_coverage_bonus", self.full_coverage_bonus),
            ("max_score", self.max_score),
            ("relevance_floor", self.relevance_floor),
            ("pass_through_score", self.pass_through_score),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be a finite non-negative number, got {value}")));
            }
        }

        if self.max_score == 0.0 {
            return Err(invalid("max_score must be positive".to_string()));
        }
        if self.relevance_floor >= self.max_score {
            return Err(invalid(format!(
                "relevance_floor {} leaves no room below max_score {}",
                self.relevance_floor, self.max_score
            )));
        }
        if self.pass_through_score > self.max_score {
            return Err(invalid(format!(
                "pass_through_score {} exceeds max_score {}",
                self.pass_through_score, self.max_score
            )));
        }
        Ok(())
    }
}

const fn invalid(reason: String) -> SearchError {
    SearchError::InvalidRanking { reason }
}

/// Reads a TOML configuration file, attaching the path to I/O failures.
pub(crate) fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SearchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
