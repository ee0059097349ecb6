//! The 256-bit Nilsimsa digest and its comparison operations.
use std::fmt;
use std::str::FromStr;

use crate::errors::{NilsimsaError, Result};

/// Number of bytes in a digest.
pub const DIGEST_LEN: usize = 32;

/// Number of bits in a digest.
pub const DIGEST_BITS: u32 = (DIGEST_LEN * 8) as u32;

/// Number of 32-bit words compared when computing distances.
pub const DIGEST_WORDS: usize = DIGEST_LEN / 4;

/// Length of the hexadecimal rendering of a digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A finalized Nilsimsa digest.
///
/// Similar inputs produce digests that differ in few bits, so two digests are
/// compared by their Hamming distance rather than by equality.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Gets the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Checks if no bit is set, as for inputs shorter than three bytes.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Splits the digest into little-endian 32-bit words.
    #[inline(always)]
    pub fn words(&self) -> [u32; DIGEST_WORDS] {
        let mut words = [0; DIGEST_WORDS];
        for (w, c) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
        }
        words
    }

    /// Gets the number of bits in which the two digests differ, in `0..=256`.
    pub fn bitwise_difference(&self, other: &Self) -> u32 {
        self.words()
            .iter()
            .zip(other.words().iter())
            .map(|(&x, &y)| (x ^ y).count_ones())
            .sum()
    }

    /// Gets a similarity score in `[-128, 128]`.
    /// 128 means identical digests; lower values mean more differing bits.
    pub fn compare(&self, other: &Self) -> i32 {
        (DIGEST_BITS / 2) as i32 - self.bitwise_difference(other) as i32
    }

    /// Renders the digest as 64 uppercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Decodes a digest from 64 hexadecimal characters of either case.
    ///
    /// # Errors
    ///
    /// [`NilsimsaError::Format`] is returned when the input is not exactly 64 characters
    /// long or contains a non-hexadecimal character.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != HEX_LEN {
            return Err(NilsimsaError::format(format!(
                "A hex digest must have {HEX_LEN} characters, but got {}.",
                s.len()
            )));
        }
        let mut bytes = [0; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| NilsimsaError::format(format!("Invalid hex digest: {e}.")))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = NilsimsaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digest({self:X})")
    }
}
