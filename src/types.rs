use serde::Serialize;
use std::ops::Deref;

/// Anything that can be searched by its display title.
///
/// Game deals and hardware offers carry very different fields; the engine only
/// ever reads the title and passes the rest through untouched.
pub trait Listing {
    fn title(&self) -> &str;
}

impl<T: Listing + ?Sized> Listing for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl Listing for str {
    fn title(&self) -> &str {
        self
    }
}

impl Listing for String {
    fn title(&self) -> &str {
        self
    }
}

/// A listing paired with its relevance score.
///
/// Serializes as the listing's own fields plus a `searchScore` number, so a UI
/// layer can render it in place of the original record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredListing<L> {
    #[serde(flatten)]
    pub listing: L,
    #[serde(rename = "searchScore")]
    pub search_score: f64,
}

impl<L> ScoredListing<L> {
    pub const fn new(listing: L, search_score: f64) -> Self {
        Self {
            listing,
            search_score,
        }
    }

    pub fn into_inner(self) -> L {
        self.listing
    }
}

impl<L> Deref for ScoredListing<L> {
    type Target = L;

    fn deref(&self) -> &L {
        &self.listing
    }
}
