// [libs/core/hash-facade/src/lib.rs]
//! Uniform `init/update/final` facade over the eight hash primitives that
//! Nighthash dispatches to (§4.1 / C1 of the core). Every variant finalizes
//! into a fixed 32-byte digest; algorithms with shorter native output
//! (MD2, MD5: 16 bytes; SHA-1: 20 bytes) have their trailing bytes
//! zero-filled here so callers never need to special-case the length.
//!
//! The underlying primitives themselves are out of scope for this crate —
//! they are real `digest`-trait implementations pulled in as dependencies,
//! never reimplemented.

use blake2::Blake2bMac;
use digest::consts::U32;
use digest::{Digest, Mac};
use sha3::{Keccak256, Sha3_256};
use thiserror::Error;

/// The eight algorithms Nighthash's Step C can select, keyed exactly as
/// `op mod 8` in the core specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Blake2bKeyZero,
    Blake2bKeyOne,
    Sha1,
    Sha256,
    Sha3_256,
    Keccak256,
    Md2,
    Md5,
}

impl Algorithm {
    /// Maps `op mod 8` to an algorithm per the Step C dispatch table.
    #[must_use]
    pub fn from_selector(selector: u32) -> Self {
        match selector % 8 {
            0 => Self::Blake2bKeyZero,
            1 => Self::Blake2bKeyOne,
            2 => Self::Sha1,
            3 => Self::Sha256,
            4 => Self::Sha3_256,
            5 => Self::Keccak256,
            6 => Self::Md2,
            _ => Self::Md5,
        }
    }

    /// Native digest length before zero-padding to 32 bytes.
    #[must_use]
    pub fn native_len(self) -> usize {
        match self {
            Self::Blake2bKeyZero | Self::Blake2bKeyOne | Self::Sha256 | Self::Sha3_256 | Self::Keccak256 => 32,
            Self::Sha1 => 20,
            Self::Md2 | Self::Md5 => 16,
        }
    }
}

/// Facade error surface. The only failure mode is a malformed keyed-BLAKE2b
/// key, which cannot occur with the fixed 32/64-byte keys the core uses, but
/// is modeled so the facade never panics on unexpected input.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid BLAKE2b key length: {0}")]
    InvalidKeyLength(usize),
}

/// A live hashing session. Holds one concrete primitive's running state;
/// `update` may be called any number of times, `finalize` consumes it.
pub enum Hasher {
    Blake2bKeyZero(Blake2bMac<U32>),
    Blake2bKeyOne(Blake2bMac<U32>),
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
    Sha3_256(Sha3_256),
    Keccak256(Keccak256),
    Md2(md2::Md2),
    Md5(md5::Md5),
}

impl Hasher {
    /// `init`: opens a hashing session for the given algorithm.
    ///
    /// # Errors
    /// Only `Algorithm::Blake2bKeyZero`/`Blake2bKeyOne` can fail, and only if
    /// the fixed key material were ever malformed — not reachable with the
    /// constant keys this crate supplies internally via [`Hasher::blake2b_keyed`].
    pub fn new(algo: Algorithm) -> Self {
        match algo {
            Algorithm::Blake2bKeyZero => Self::blake2b_keyed(&[0u8; 32])
                .expect("32 zero bytes is a valid BLAKE2b key"),
            Algorithm::Blake2bKeyOne => Self::blake2b_keyed(&[1u8; 64])
                .expect("64 one bytes is a valid BLAKE2b key"),
            Algorithm::Sha1 => Self::Sha1(sha1::Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(sha2::Sha256::new()),
            Algorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
            Algorithm::Keccak256 => Self::Keccak256(Keccak256::new()),
            Algorithm::Md2 => Self::Md2(md2::Md2::new()),
            Algorithm::Md5 => Self::Md5(md5::Md5::new()),
        }
    }

    fn blake2b_keyed(key: &[u8]) -> Result<Self, HashError> {
        let mac = Blake2bMac::<U32>::new_from_slice(key)
            .map_err(|_| HashError::InvalidKeyLength(key.len()))?;
        Ok(if key.len() == 32 {
            Self::Blake2bKeyZero(mac)
        } else {
            Self::Blake2bKeyOne(mac)
        })
    }

    /// `update`: feeds more bytes into the running digest.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Blake2bKeyZero(h) | Self::Blake2bKeyOne(h) => Mac::update(h, data),
            Self::Sha1(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha3_256(h) => Digest::update(h, data),
            Self::Keccak256(h) => Digest::update(h, data),
            Self::Md2(h) => Digest::update(h, data),
            Self::Md5(h) => Digest::update(h, data),
        }
    }

    /// `final`: consumes the session, returning a 32-byte digest with
    /// trailing bytes zero-filled for algorithms that natively produce
    /// fewer than 32 bytes.
    #[must_use]
    pub fn finalize(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        match self {
            Self::Blake2bKeyZero(h) | Self::Blake2bKeyOne(h) => {
                out.copy_from_slice(&Mac::finalize(h).into_bytes());
            }
            Self::Sha1(h) => out[..20].copy_from_slice(&Digest::finalize(h)),
            Self::Sha256(h) => out.copy_from_slice(&Digest::finalize(h)),
            Self::Sha3_256(h) => out.copy_from_slice(&Digest::finalize(h)),
            Self::Keccak256(h) => out.copy_from_slice(&Digest::finalize(h)),
            Self::Md2(h) => out[..16].copy_from_slice(&Digest::finalize(h)),
            Self::Md5(h) => out[..16].copy_from_slice(&Digest::finalize(h)),
        }
        out
    }
}

/// Convenience one-shot digest: `init` + `update(data)` + optional
/// `update(suffix)` + `final`, used by Nighthash's `hash_index` suffix.
#[must_use]
pub fn digest32(algo: Algorithm, data: &[u8], suffix: Option<&[u8]>) -> [u8; 32] {
    let mut h = Hasher::new(algo);
    h.update(data);
    if let Some(s) = suffix {
        h.update(s);
    }
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_digests_are_zero_padded() {
        let out = digest32(Algorithm::Sha1, b"abc", None);
        assert_ne!(out[..20], [0u8; 20]);
        assert_eq!(out[20..], [0u8; 12]);

        let out = digest32(Algorithm::Md5, b"abc", None);
        assert_eq!(out[16..], [0u8; 16]);
    }

    #[test]
    fn selector_wraps_mod_eight() {
        assert_eq!(Algorithm::from_selector(0), Algorithm::Blake2bKeyZero);
        assert_eq!(Algorithm::from_selector(8), Algorithm::Blake2bKeyZero);
        assert_eq!(Algorithm::from_selector(15), Algorithm::Md5);
    }

    #[test]
    fn blake2b_keys_differ_by_selector() {
        let a = digest32(Algorithm::Blake2bKeyZero, b"same input", None);
        let b = digest32(Algorithm::Blake2bKeyOne, b"same input", None);
        assert_ne!(a, b);
    }

    #[test]
    fn sha256_known_vector() {
        let out = digest32(Algorithm::Sha256, b"abc", None);
        assert_eq!(
            hex::encode(out),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
