//! An exhaustive approach of all-pair similarity search on Nilsimsa digests.
use anyhow::Result;
use nilsimsa::digest::DIGEST_WORDS;
use nilsimsa::Digest;

/// An exhaustive approach of all-pair similarity search on Nilsimsa digests.
#[derive(Default)]
pub struct DigestJoiner {
    words: Vec<[u32; DIGEST_WORDS]>,
    shows_progress: bool,
}

impl DigestJoiner {
    /// Creates an empty instance.
    pub const fn new() -> Self {
        Self {
            words: vec![],
            shows_progress: false,
        }
    }

    /// Reports the progress through `tracing` events?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Appends a digest.
    pub fn add(&mut self, digest: Digest) {
        self.words.push(digest.words());
    }

    /// Appends a digest given in 64 hexadecimal characters.
    /// If the input cannot be decoded, an error is returned.
    pub fn add_hex(&mut self, hex: &str) -> Result<()> {
        let digest = hex.parse::<Digest>()?;
        self.add(digest);
        Ok(())
    }

    /// Finds all pairs whose bitwise difference is within `max_difference`,
    /// returning triplets of the left-side id, the right-side id, and their difference.
    pub fn similar_pairs(&self, max_difference: u32) -> Vec<(usize, usize, u32)> {
        if self.shows_progress {
            tracing::info!(
                num_digests = self.num_digests(),
                max_difference,
                "[DigestJoiner::similar_pairs] Start"
            );
        }

        let mut matched = vec![];
        for i in 0..self.words.len() {
            if self.shows_progress && (i + 1) % 10000 == 0 {
                tracing::debug!(
                    "[DigestJoiner::similar_pairs] Processed {}/{}...",
                    i + 1,
                    self.words.len()
                );
            }
            for j in i + 1..self.words.len() {
                if let Some(dist) = self.bitwise_difference(i, j, max_difference) {
                    matched.push((i, j, dist));
                }
            }
        }
        if self.shows_progress {
            tracing::info!(
                num_matched = matched.len(),
                "[DigestJoiner::similar_pairs] Done"
            );
        }
        matched
    }

    /// Gets the number of stored digests.
    pub fn num_digests(&self) -> usize {
        self.words.len()
    }

    /// Gets the memory usage in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.num_digests() * std::mem::size_of::<[u32; DIGEST_WORDS]>()
    }

    fn bitwise_difference(&self, i: usize, j: usize, bound: u32) -> Option<u32> {
        let xs = &self.words[i];
        let ys = &self.words[j];
        let mut dist = 0;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            dist += (x ^ y).count_ones();
            if bound < dist {
                return None;
            }
        }
        Some(dist)
    }
}
