// [libs/domain/peach/src/mario.rs]
//! Derivation of the starting tile index ("mario", §4.7). A 32-bit
//! wrapping multiplication across all 32 bytes of the trailer hash — this
//! has a roughly 1-in-8 chance of collapsing to zero partway through
//! (any zero byte zeroes the running product for good), which is
//! preserved deliberately rather than patched (§9 Open Question).

use trigpeach_tilemap::TILE_COUNT;

/// Computes the starting index from a 32-byte trailer hash.
#[must_use]
pub fn mario(bt_hash: &[u8; 32]) -> u32 {
    let mut acc = bt_hash[0] as u32;
    for &byte in &bt_hash[1..] {
        acc = acc.wrapping_mul(byte as u32);
    }
    acc % TILE_COUNT as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_single_zero_byte_collapses_the_product_to_zero() {
        let mut hash = [7u8; 32];
        hash[15] = 0;
        assert_eq!(mario(&hash), 0);
    }

    #[test]
    fn result_is_always_in_range() {
        for seed in [0u8, 1, 255] {
            let hash = [seed; 32];
            assert!(mario(&hash) < TILE_COUNT as u32);
        }
    }

    #[test]
    fn is_deterministic() {
        let hash = [3u8; 32];
        assert_eq!(mario(&hash), mario(&hash));
    }
}
