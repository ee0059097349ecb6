//! Nilsimsa locality-sensitive digests.
//!
//! A digest summarizes the byte trigrams of an input in 256 bits such that similar inputs
//! produce digests differing in few bits. Digests are compared by their bitwise difference
//! (Hamming distance) or by the similarity score `128 - difference`.
//!
//! ```
//! use nilsimsa::{Digest, Nilsimsa};
//!
//! let mut hasher = Nilsimsa::new();
//! hasher.update("A short test message");
//! let digest = hasher.digest();
//!
//! let other = Nilsimsa::hash_of("Something completely different").digest();
//! assert_eq!(digest.bitwise_difference(&other), 133);
//!
//! let decoded: Digest = digest.to_hex().parse().unwrap();
//! assert_eq!(decoded, digest);
//! ```
#![deny(missing_docs)]

pub mod digest;
pub mod errors;
pub mod hasher;
pub mod table;

pub use digest::Digest;
pub use errors::{NilsimsaError, Result};
pub use hasher::Nilsimsa;
