//! Filter and rank: score every listing, drop noise, sort by relevance.

use super::query::PreparedQuery;
use crate::types::{Listing, ScoredListing};
use std::time::Instant;

/// Scores `listings` against a prepared query and returns the relevant ones,
/// best first.
///
/// - Pass-through query: every listing, in input order, at the neutral score
/// - Otherwise: listings scoring at or below the relevance floor are dropped and
///   the rest sorted by descending score. The sort is stable, so ties keep their
///   input order.
///
/// Inputs are only read; each result holds a clone of its listing.
pub fn rank<L: Listing + Clone>(listings: &[L], query: &PreparedQuery) -> Vec<ScoredListing<L>> {
    let config = query.config();

    if query.is_pass_through() {
        return listings
            .iter()
            .map(|listing| ScoredListing::new(listing.clone(), config.pass_through_score))
            .collect();
    }

    let start = Instant::now();
    let mut results: Vec<ScoredListing<L>> = listings
        .iter()
        .filter_map(|listing| {
            let score = query.score(listing.title());
            tracing::trace!(title = listing.title(), score, "Scored listing");
            (score > config.relevance_floor).then(|| ScoredListing::new(listing.clone(), score))
        })
        .collect();

    results.sort_by(|a, b| b.search_score.total_cmp(&a.search_score));

    tracing::debug!(
        query = query.normalized(),
        expansions = query.expansions().len(),
        candidates = listings.len(),
        kept = results.len(),
        elapsed = ?start.elapsed(),
        "Ranked listings"
    );

    results
}
