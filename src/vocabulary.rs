//! Domain vocabulary: brand and model aliases plus the key-attribute word lists.
//!
//! The built-in table ships as `vocabulary.toml` and is parsed once per process.
//! Host applications can load their own table from TOML with the same layout.

use crate::config::read_config_file;
use crate::error::{Result, SearchError};
use crate::search::normalize::normalize;
use ahash::AHashMap;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, LazyLock},
};

const BUILTIN_TOML: &str = include_str!("vocabulary.toml");

/// Brand names recognized by the key-attribute extractor.
pub const DEFAULT_BRANDS: &[&str] = &[
    "nvidia", "amd", "intel", "asus", "msi", "gigabyte", "corsair", "kingston", "samsung",
    "western", "seagate",
];

/// Product-series words recognized by the key-attribute extractor.
pub const DEFAULT_SERIES: &[&str] = &["rtx", "gtx", "rx", "ryzen", "core", "i9", "i7", "i5", "i3"];

static BUILTIN: LazyLock<Arc<Vocabulary>> = LazyLock::new(|| {
    let vocabulary =
        Vocabulary::from_toml_str(BUILTIN_TOML).expect("built-in vocabulary.toml must be valid");
    tracing::debug!(entries = vocabulary.len(), "Loaded built-in vocabulary");
    Arc::new(vocabulary)
});

/// On-disk layout of a vocabulary document.
#[derive(Debug, Default, Deserialize)]
struct VocabularyDocument {
    #[serde(default)]
    aliases: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    attributes: AttributeLists,
}

#[derive(Debug, Default, Deserialize)]
struct AttributeLists {
    brands: Option<Vec<String>>,
    series: Option<Vec<String>>,
}

/// Read-only alias table keyed by normalized single-token words.
///
/// Every key and alias is stored in normalized form, so lookups take a token
/// straight out of a normalized query.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    aliases: AHashMap<String, Vec<String>>,
    brands: Vec<String>,
    series: Vec<String>,
}

impl Vocabulary {
    /// The process-wide built-in vocabulary.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a vocabulary from a TOML document.
    ///
    /// Keys are normalized and must end up as a single token. Keys that collapse
    /// onto the same token (e.g. `"RTX"` and `"rtx"`) are merged.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: VocabularyDocument = toml::from_str(source)?;
        Self::from_document(document)
    }

    /// Reads and parses a vocabulary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = read_config_file(path)?;
        let vocabulary = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            entries = vocabulary.len(),
            "Loaded custom vocabulary"
        );
        Ok(vocabulary)
    }

    fn from_document(document: VocabularyDocument) -> Result<Self> {
        let mut aliases: AHashMap<String, Vec<String>> =
            AHashMap::with_capacity(document.aliases.len());

        for (key, raw_aliases) in document.aliases {
            let token = single_token(&key)?;
            let entry = aliases.entry(token).or_default();
            if !entry.is_empty() {
                tracing::warn!(
                    key = %key,
                    "Duplicate vocabulary key after normalization, merging aliases"
                );
            }

            for alias in raw_aliases {
                let alias = normalize(&alias);
                if !alias.is_empty() && !entry.contains(&alias) {
                    entry.push(alias);
                }
            }
        }

        let brands = match document.attributes.brands {
            Some(words) => normalize_words(&words)?,
            None => DEFAULT_BRANDS.iter().map(ToString::to_string).collect(),
        };
        let series = match document.attributes.series {
            Some(words) => normalize_words(&words)?,
            None => DEFAULT_SERIES.iter().map(ToString::to_string).collect(),
        };

        Ok(Self {
            aliases,
            brands,
            series,
        })
    }

    /// Normalized aliases for a normalized token; empty when the token is unknown.
    pub fn aliases(&self, token: &str) -> &[String] {
        self.aliases.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.aliases.contains_key(token)
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn series(&self) -> &[String] {
        &self.series
    }

    /// Number of alias entries.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn single_token(word: &str) -> Result<String> {
    let token = normalize(word);
    if token.is_empty() || token.contains(' ') {
        return Err(SearchError::InvalidVocabularyKey {
            key: word.to_string(),
        });
    }
    Ok(token)
}

fn normalize_words(words: &[String]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(words.len());
    for word in words {
        let token = single_token(word)?;
        if !out.contains(&token) {
            out.push(token);
        }
    }
    Ok(out)
}
