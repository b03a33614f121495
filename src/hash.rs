//! djb2 string hashing with a fixed 64-bit accumulator
//!
//! djb2 is a fast, non-cryptographic hash (seed 5381, multiplier 33)
//! suitable for hash-table bucketing and change detection. The
//! accumulator is pinned to `u64` with wrapping arithmetic, so the same
//! input produces the same value on every platform. Hashing covers the
//! full byte content of the input, interior zero bytes included.
//!
//! **Not suitable for** adversarial collision resistance or any
//! cryptographic purpose.
//!
//! # Examples
//!
//! One-shot, streaming, and at compile time:
//!
//! ```
//! use strkit::hash::{Djb2, hash};
//!
//! const EMPTY: u64 = hash("");
//! assert_eq!(EMPTY, 5381);
//!
//! let mut hasher = Djb2::new();
//! hasher.update(b"hel");
//! hasher.update(b"lo");
//! assert_eq!(hasher.finalize(), hash("hello"));
//! ```
//!
//! Bucketing a standard collection:
//!
//! ```
//! use std::collections::HashMap;
//! use strkit::hash::Djb2BuildHasher;
//!
//! let mut counts: HashMap<&str, u32, Djb2BuildHasher> = HashMap::default();
//! counts.insert("hello", 1);
//! assert_eq!(counts.get("hello"), Some(&1));
//! ```

use std::fmt;
use std::hash::{BuildHasherDefault, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prefix;

/// The djb2 seed value, returned for empty input
pub const SEED: u64 = 5381;

/// Hash the UTF-8 bytes of a string
///
/// # Examples
///
/// ```
/// use strkit::hash::hash;
///
/// assert_eq!(hash(""), 5381);
/// assert_eq!(hash("hello"), 210_714_636_441);
/// ```
#[inline]
#[must_use]
pub const fn hash(s: &str) -> u64 {
    hash_bytes(s.as_bytes())
}

/// Hash a raw byte slice
///
/// This is the core the [`hash`] string form delegates to. Being a
/// `const fn`, digests of fixed strings can be computed at compile time.
#[must_use]
pub const fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut acc = SEED;
    let mut i = 0;
    while i < bytes.len() {
        acc = step(acc, bytes[i]);
        i += 1;
    }
    acc
}

// u64::from is not const
#[allow(clippy::cast_lossless)]
const fn step(acc: u64, byte: u8) -> u64 {
    acc.wrapping_mul(33).wrapping_add(byte as u64)
}

/// Streaming djb2 hasher
///
/// Feeding the same bytes in any chunking yields the same value as the
/// one-shot [`hash_bytes`]. Also implements [`std::hash::Hasher`], so
/// standard collections can bucket with djb2 via [`Djb2BuildHasher`].
#[derive(Debug, Clone, Copy)]
pub struct Djb2 {
    state: u64,
}

impl Djb2 {
    /// Create a hasher initialized to the djb2 seed
    #[must_use]
    pub const fn new() -> Self {
        Self { state: SEED }
    }

    /// Feed bytes into the hasher
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.state = step(self.state, bytes[i]);
            i += 1;
        }
    }

    /// The hash of everything fed so far
    ///
    /// Does not consume the hasher; more bytes may be fed afterwards.
    #[must_use]
    pub const fn finalize(&self) -> u64 {
        self.state
    }
}

impl Default for Djb2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Djb2 {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// `BuildHasher` plugging djb2 into `HashMap` and `HashSet`
pub type Djb2BuildHasher = BuildHasherDefault<Djb2>;

/// A computed djb2 digest
///
/// A transparent wrapper around the 64-bit hash value for callers that
/// store or print digests. Renders as 16 lowercase hex digits; parses
/// back from hex with an optional `0x` prefix.
///
/// # Examples
///
/// ```
/// use strkit::hash::Digest;
///
/// let digest = Digest::of("hello");
/// assert_eq!(digest.to_string(), "000000310f923099");
/// assert_eq!("0x310f923099".parse::<Digest>(), Ok(digest));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Digest(u64);

impl Digest {
    /// Digest of a string
    #[must_use]
    pub const fn of(s: &str) -> Self {
        Self(hash(s))
    }

    /// Digest of a raw byte slice
    #[must_use]
    pub const fn of_bytes(bytes: &[u8]) -> Self {
        Self(hash_bytes(bytes))
    }

    /// Wrap a previously computed hash value
    #[must_use]
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// The underlying hash value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when parsing a [`Digest`] from text fails
///
/// Digests parse from up to 16 hex digits, optionally prefixed with
/// `0x`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid digest {input:?}: {source}")]
pub struct ParseDigestError {
    input: String,
    source: ParseIntError,
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = prefix::strip_prefix(s, "0x").unwrap_or(s);
        u64::from_str_radix(digits, 16).map(Self).map_err(|source| ParseDigestError {
            input: s.to_string(),
            source,
        })
    }
}
