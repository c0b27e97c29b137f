//! Query expansion through the domain vocabulary.
//!
//! Turns a query like "rtx 4070" into the set of phrasings a vendor title might
//! use for it: "geforce rtx 4070", "4070 nvidia rtx", "rtx4070", and so on.

use super::normalize::{normalize, tokens};
use crate::vocabulary::Vocabulary;
use ahash::AHashSet;

/// Set of query variants. Only used for membership and substring tests.
pub type Expansions = AHashSet<String>;

/// Expands a raw query into its variants.
///
/// The set always holds the normalized query and the trimmed, lower-cased raw
/// query, so a literal match survives even where normalization would alter it.
/// For every query token with vocabulary aliases it adds each alias on its own
/// and recombined with the remaining tokens on either side. Multi-token queries
/// also get their separator-free and hyphenated concatenations.
///
/// Empty strings are never inserted.
pub fn expand(query: &str, vocabulary: &Vocabulary) -> Expansions {
    let normalized = normalize(query);
    let words = tokens(&normalized);
    let mut variants = Expansions::default();

    insert(&mut variants, query.trim().to_lowercase());

    for (index, word) in words.iter().enumerate() {
        let aliases = vocabulary.aliases(word);
        if aliases.is_empty() {
            continue;
        }

        let rest = words
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, w)| *w)
            .collect::<Vec<_>>()
            .join(" ");

        for alias in aliases {
            insert(&mut variants, alias.clone());
            if !rest.is_empty() {
                insert(&mut variants, normalize(&format!("{alias} {rest}")));
                insert(&mut variants, normalize(&format!("{rest} {alias}")));
            }
        }
    }

    if words.len() > 1 {
        insert(&mut variants, words.concat());
        insert(&mut variants, words.join("-"));
    }

    insert(&mut variants, normalized);
    variants
}

fn insert(variants: &mut Expansions, variant: String) {
    if !variant.is_empty() {
        variants.insert(variant);
    }
}
