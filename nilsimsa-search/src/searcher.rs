//! Searcher of near-duplicate documents.
use hashbrown::HashMap;
use nilsimsa::{Digest, Nilsimsa};
use rayon::prelude::*;

use crate::errors::{Result, SearchError};
use crate::join::DigestJoiner;

const MAX_DIFFERENCE: u32 = nilsimsa::digest::DIGEST_BITS;

/// Searcher of near-duplicate documents on their Nilsimsa digests.
///
/// Documents are given as bytes. Text must be encoded by the caller beforehand.
#[derive(Default)]
pub struct DuplicateSearcher {
    digests: Vec<Digest>,
    joiner: Option<DigestJoiner>,
    shows_progress: bool,
}

impl DuplicateSearcher {
    /// Creates an instance.
    pub const fn new() -> Self {
        Self {
            digests: vec![],
            joiner: None,
            shows_progress: false,
        }
    }

    /// Reports the progress through `tracing` events?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Builds the database of digests from input documents.
    ///
    /// # Arguments
    ///
    /// * `documents` - List of documents (must not include an empty one).
    pub fn build_digests<I, D>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[u8]>,
    {
        let mut hasher = Nilsimsa::new();
        let mut digests = vec![];
        for (i, doc) in documents.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % 10000 == 0 {
                tracing::debug!("Processed {} documents...", i + 1);
            }
            let doc = doc.as_ref();
            if doc.is_empty() {
                return Err(SearchError::input("Input document must not be empty."));
            }
            digests.push(hasher.digest_data(doc));
        }
        self.set_digests(digests);
        Ok(self)
    }

    /// Builds the database of digests from input documents in parallel.
    ///
    /// # Arguments
    ///
    /// * `documents` - List of documents (must not include an empty one).
    pub fn build_digests_in_parallel<I, D>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[u8]> + Sync,
    {
        let documents: Vec<_> = documents.into_iter().collect();
        if self.shows_progress {
            tracing::debug!("Collected {} documents", documents.len());
        }
        if documents.iter().any(|doc| doc.as_ref().is_empty()) {
            return Err(SearchError::input("Input document must not be empty."));
        }
        let digests = documents
            .par_iter()
            .map(|doc| Nilsimsa::hash_of(doc).digest())
            .collect();
        self.set_digests(digests);
        Ok(self)
    }

    fn set_digests(&mut self, digests: Vec<Digest>) {
        let mut joiner = DigestJoiner::new().shows_progress(self.shows_progress);
        for &digest in &digests {
            joiner.add(digest);
        }
        if self.shows_progress {
            tracing::info!(
                num_digests = digests.len(),
                memory_in_bytes = joiner.memory_in_bytes(),
                "Produced digests"
            );
        }
        self.digests = digests;
        self.joiner = Some(joiner);
    }

    /// Searches for all pairs of similar documents whose bitwise difference is within
    /// `max_difference`, returning triplets of the left-side index, the right-side index,
    /// and their difference.
    ///
    /// # Errors
    ///
    /// [`SearchError::Input`] is returned when `max_difference` exceeds 256.
    pub fn search_similar_pairs(&self, max_difference: u32) -> Result<Vec<(usize, usize, u32)>> {
        if MAX_DIFFERENCE < max_difference {
            return Err(SearchError::input(
                "The maximum difference must be in the range of [0,256].",
            ));
        }
        Ok(self
            .joiner
            .as_ref()
            .map_or_else(Vec::new, |joiner| joiner.similar_pairs(max_difference)))
    }

    /// Groups documents having identical digests.
    /// Only groups of two or more documents are returned, ordered by their first index.
    pub fn exact_duplicates(&self) -> Vec<Vec<usize>> {
        let mut groups = HashMap::<Digest, Vec<usize>>::new();
        for (i, &digest) in self.digests.iter().enumerate() {
            groups.entry(digest).or_default().push(i);
        }
        let mut groups: Vec<_> = groups.into_values().filter(|g| g.len() > 1).collect();
        groups.sort_unstable_by_key(|g| g[0]);
        groups
    }

    /// Gets the digests of input documents.
    pub fn digests(&self) -> &[Digest] {
        &self.digests
    }

    /// Gets the number of input documents.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Checks if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the memory usage in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.joiner
            .as_ref()
            .map_or(0, |joiner| joiner.memory_in_bytes())
    }
}
