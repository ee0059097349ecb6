//! Near-duplicate document search with Nilsimsa digests.
#![deny(missing_docs)]

pub mod errors;
pub mod join;
pub mod searcher;

pub use join::DigestJoiner;
pub use searcher::DuplicateSearcher;
