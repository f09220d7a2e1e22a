// [libs/core/tilemap/src/index_jump.rs]
//! The index-jump step (§4.6 / C7): maps `(current tile, nonce)` to the
//! next tile index to visit.

use crate::tile::TILE_LEN;
use trigpeach_nighthash::nighthash;

/// Number of tiles in the map; also the modulus for index-jump, since
/// `1_048_576 == 2^20`.
pub const TILE_COUNT: usize = 1 << 20;

/// `next_index`: builds the 1060-byte seed `nonce ‖ current(LE) ‖ tile`,
/// hashes it with Nighthash (`tx = false`, no mutation of the seed), and
/// sums its eight little-endian `u32` lanes modulo `2^20`.
#[must_use]
pub fn next_index(current: u32, tile: &[u8; TILE_LEN], nonce: &[u8; 32]) -> u32 {
    let mut seed = [0u8; 32 + 4 + TILE_LEN];
    seed[..32].copy_from_slice(nonce);
    seed[32..36].copy_from_slice(&current.to_le_bytes());
    seed[36..].copy_from_slice(tile);

    let h = nighthash(&mut seed, current, false, false);

    let mut sum = 0u32;
    for lane in h.chunks_exact(4) {
        sum = sum.wrapping_add(u32::from_le_bytes(lane.try_into().expect("4-byte lane")));
    }
    sum & (TILE_COUNT as u32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        let tile = [7u8; TILE_LEN];
        let nonce = [3u8; 32];
        assert_eq!(next_index(0, &tile, &nonce), next_index(0, &tile, &nonce));
    }

    #[test]
    fn result_is_always_in_range() {
        let tile = [9u8; TILE_LEN];
        let nonce = [1u8; 32];
        for current in [0u32, 1, 1_048_575, 500_000] {
            let next = next_index(current, &tile, &nonce);
            assert!((next as usize) < TILE_COUNT);
        }
    }
}
