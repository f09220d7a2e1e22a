// [libs/core/nighthash/src/lib.rs]
//! Nighthash (C5 of the core): the non-cryptographic dispatcher that picks
//! among eight real cryptographic hash functions using float-derived
//! entropy (§4.4). Pure and deterministic given its inputs; the only
//! side effect is the optional in-place rewrite of `input` when `tx` is
//! true.

mod dflop;
mod dmemtx;

pub use dflop::dflop;
pub use dmemtx::dmemtx;

use trigpeach_hashes::{digest32, Algorithm};

/// `nighthash`: runs Step A (always), Step B (only if `tx`), then Step C
/// (algorithm selection + hashing, with the optional little-endian
/// `index` suffix when `hash_index` is set).
///
/// When `tx` is `false`, `input` is read-only — the function only ever
/// calls [`dflop`] with `tx = false`, which itself guarantees no writes.
#[must_use]
pub fn nighthash(input: &mut [u8], index: u32, hash_index: bool, tx: bool) -> [u8; 32] {
    let mut op = dflop::dflop(input, tx, index);
    if tx {
        op = dmemtx::dmemtx(input, op, index);
    }

    let algo = Algorithm::from_selector(op);
    let suffix = index.to_le_bytes();
    digest32(algo, input, hash_index.then_some(suffix.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_false_leaves_input_bitwise_unchanged() {
        let mut buf: Vec<u8> = (0..36u8).collect();
        let before = buf.clone();
        let _ = nighthash(&mut buf, 42, true, false);
        assert_eq!(buf, before);
    }

    #[test]
    fn is_deterministic() {
        let mut a: Vec<u8> = b"abc".to_vec();
        a.resize(36, 0);
        let mut b = a.clone();
        let out_a = nighthash(&mut a, 42, true, false);
        let out_b = nighthash(&mut b, 42, true, false);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn hash_index_suffix_changes_the_digest() {
        let mut a: Vec<u8> = b"abc".to_vec();
        a.resize(36, 0);
        let mut b = a.clone();
        let with_index = nighthash(&mut a, 42, true, false);
        let without_index = nighthash(&mut b, 42, false, false);
        assert_ne!(with_index, without_index);
    }

    #[test]
    fn tx_true_changes_the_digest_versus_tx_false() {
        let mut a: Vec<u8> = (0..36u8).collect();
        let mut b = a.clone();
        let out_tx = nighthash(&mut a, 1, false, true);
        let out_no_tx = nighthash(&mut b, 1, false, false);
        assert_ne!(out_tx, out_no_tx);
    }
}
