//! Incremental Nilsimsa digest computation.
use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::io;

use crate::digest::{Digest, DIGEST_LEN};
use crate::table::tran3;

const NUM_ACCUMULATORS: usize = 256;
const WINDOW_SIZE: usize = 4;

/// Accumulating state of a Nilsimsa digest.
///
/// Bytes are appended with [`Nilsimsa::update`] (or through [`io::Write`] and [`Extend`]),
/// and the digest is computed on the first request after a mutation and cached until
/// the next one.
///
/// The cache lives in a [`Cell`], so an instance can be moved to another thread but not
/// shared between threads.
///
/// # Examples
///
/// ```
/// use nilsimsa::Nilsimsa;
///
/// let a = Nilsimsa::hash_of("A short test message");
/// let b = Nilsimsa::hash_of("A short test message!");
/// assert_eq!(a.bitwise_difference(&b), 3);
/// assert_eq!(a.compare(&b), 125);
/// ```
#[derive(Clone, Debug)]
pub struct Nilsimsa {
    count: u64,
    acc: [u64; NUM_ACCUMULATORS],
    // Most recent byte first.
    window: [Option<u8>; WINDOW_SIZE],
    digest: Cell<Option<Digest>>,
}

impl Default for Nilsimsa {
    fn default() -> Self {
        Self::new()
    }
}

impl Nilsimsa {
    /// Creates an empty state.
    pub const fn new() -> Self {
        Self {
            count: 0,
            acc: [0; NUM_ACCUMULATORS],
            window: [None; WINDOW_SIZE],
            digest: Cell::new(None),
        }
    }

    /// Creates a state with `data` appended, without finalizing it.
    pub fn hash_of<D>(data: D) -> Self
    where
        D: AsRef<[u8]>,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher
    }

    /// Appends bytes to the state.
    ///
    /// Text must be converted to bytes by the caller, e.g., with [`str::as_bytes`].
    pub fn update<D>(&mut self, data: D) -> &mut Self
    where
        D: AsRef<[u8]>,
    {
        for &ch in data.as_ref() {
            self.push(ch);
        }
        self.digest.set(None);
        self
    }

    #[inline(always)]
    fn push(&mut self, ch: u8) {
        self.count += 1;
        let [w0, w1, w2, w3] = self.window;
        if let (Some(c0), Some(c1)) = (w0, w1) {
            self.acc[tran3(ch, c0, c1, 0) as usize] += 1;
            if let Some(c2) = w2 {
                self.acc[tran3(ch, c0, c2, 1) as usize] += 1;
                self.acc[tran3(ch, c1, c2, 2) as usize] += 1;
                if let Some(c3) = w3 {
                    self.acc[tran3(ch, c0, c3, 3) as usize] += 1;
                    self.acc[tran3(ch, c1, c3, 4) as usize] += 1;
                    self.acc[tran3(ch, c2, c3, 5) as usize] += 1;
                    self.acc[tran3(c3, c0, ch, 6) as usize] += 1;
                    self.acc[tran3(c3, c2, ch, 7) as usize] += 1;
                }
            }
        }
        self.window = [Some(ch), w0, w1, w2];
    }

    /// Clears the state to the empty form.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Gets the number of bytes appended since creation or the last reset.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Gets the digest of the bytes appended so far.
    pub fn digest(&self) -> Digest {
        if let Some(digest) = self.digest.get() {
            return digest;
        }
        let digest = self.finalize();
        self.digest.set(Some(digest));
        digest
    }

    /// Resets the state, appends `data`, and returns its digest.
    pub fn digest_data<D>(&mut self, data: D) -> Digest
    where
        D: AsRef<[u8]>,
    {
        self.reset().update(data).digest()
    }

    /// Gets the digest as 64 uppercase hexadecimal characters.
    pub fn hex_digest(&self) -> String {
        self.digest().to_hex()
    }

    /// Resets the state, appends `data`, and returns its hexadecimal digest.
    pub fn hex_digest_data<D>(&mut self, data: D) -> String
    where
        D: AsRef<[u8]>,
    {
        self.digest_data(data).to_hex()
    }

    /// Gets the number of bits in which the two digests differ, in `0..=256`.
    pub fn bitwise_difference(&self, other: &Self) -> u32 {
        self.digest().bitwise_difference(&other.digest())
    }

    /// Gets a similarity score in `[-128, 128]`, where 128 means identical digests.
    pub fn compare(&self, other: &Self) -> i32 {
        self.digest().compare(&other.digest())
    }

    fn finalize(&self) -> Digest {
        let total = match self.count {
            0..=2 => 0,
            3 => 1,
            4 => 4,
            n => 8 * n - 28,
        };
        let threshold = total / 256;

        let mut bytes = [0; DIGEST_LEN];
        for (i, &a) in self.acc.iter().enumerate() {
            if a > threshold {
                bytes[DIGEST_LEN - 1 - (i >> 3)] |= 1 << (i & 7);
            }
        }
        Digest::new(bytes)
    }
}

impl PartialEq for Nilsimsa {
    fn eq(&self, other: &Self) -> bool {
        self.digest() == other.digest()
    }
}

impl Eq for Nilsimsa {}

impl PartialEq<Digest> for Nilsimsa {
    fn eq(&self, other: &Digest) -> bool {
        self.digest() == *other
    }
}

impl Hash for Nilsimsa {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest().hash(state);
    }
}

impl io::Write for Nilsimsa {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Extend<u8> for Nilsimsa {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for ch in iter {
            self.push(ch);
        }
        self.digest.set(None);
    }
}

impl<'a> Extend<&'a u8> for Nilsimsa {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
