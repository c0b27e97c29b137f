//! Offline relevance search and ranking for deal listings.
//!
//! Given listings with free-text titles and a query typed by a user, returns the
//! plausibly relevant listings with a `0..=100` score, best first. Matching
//! tolerates accents, missing separators, vendor prefixes and brand/model
//! aliases without any index or network round-trip.
//!
//! ```
//! use offer_search::search_and_score;
//!
//! let titles = [
//!     "Placa de Vídeo NVIDIA GeForce RTX 4070 Ti 12GB",
//!     "Monitor 27\" Gamer 144Hz Full HD 1ms",
//! ];
//! let results = search_and_score(&titles, "rtx 4070");
//! assert_eq!(results.len(), 1);
//! assert!(results[0].search_score >= 80.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod search;
pub mod tracing;
pub mod types;
pub mod vocabulary;

pub use config::RankingConfig;
pub use engine::{SearchEngine, search_and_score};
pub use error::{Result, SearchError};
pub use search::{Expansions, PreparedQuery, expand, extract_key_info, normalize, score};
pub use types::{Listing, ScoredListing};
pub use vocabulary::Vocabulary;
