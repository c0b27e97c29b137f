//! Error types for loading search configuration.
//!
//! Searching itself is total and never fails; only the configuration surface
//! (custom vocabularies and ranking overrides) can reject its input.

use std::path::PathBuf;

/// A specialized Result type for configuration loading.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error returned when a vocabulary or ranking configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The configuration file could not be read.
    #[error("failed to read search configuration at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML or does not match the expected layout.
    #[error("failed to parse search configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A vocabulary key must normalize to exactly one token.
    #[error("vocabulary key '{key}' must normalize to a single non-empty token")]
    InvalidVocabularyKey { key: String },
    /// Ranking constants are out of range.
    #[error("invalid ranking configuration: {reason}")]
    InvalidRanking { reason: String },
}
