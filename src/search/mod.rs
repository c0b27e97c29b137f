//! Relevance search over listing titles.
//!
//! The pipeline is linear and stateless: the query is normalized and expanded
//! once, then every title is normalized, mined for key attributes and scored;
//! finally low-confidence matches are dropped and the rest sorted.

// Module declarations
pub(crate) mod expand;
pub(crate) mod extract;
pub(crate) mod normalize;
pub(crate) mod query;
pub(crate) mod rank;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use expand::{Expansions, expand};
pub use extract::extract_key_info;
pub use normalize::normalize;
pub use query::PreparedQuery;
pub use rank::rank;
pub use scoring::score;
