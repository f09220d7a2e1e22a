// [libs/core/tilemap/src/tile.rs]
//! The tile generator (§4.5 / C6): a 1 KiB tile for index `i`, derived
//! solely from the previous block hash and `i`, by chaining Nighthash
//! 32 times. Self-consistent only under a given `phash` — a tile computed
//! under one `phash` has no relationship to the same index under another.

use trigpeach_nighthash::nighthash;

/// Size of one tile, in bytes.
pub const TILE_LEN: usize = 1024;
const LINK_LEN: usize = 32;
const LINK_COUNT: usize = TILE_LEN / LINK_LEN; // 32

/// `generate_tile`: deterministically derives the 1 KiB tile at `index`
/// from `phash`. Two calls with the same arguments produce byte-identical
/// output on any IEEE-754 target (§8 invariant).
#[must_use]
pub fn generate_tile(phash: &[u8; 32], index: u32) -> [u8; TILE_LEN] {
    let mut seed = [0u8; 36];
    seed[..4].copy_from_slice(&index.to_le_bytes());
    seed[4..].copy_from_slice(phash);

    let mut tile = [0u8; TILE_LEN];
    let first_link = nighthash(&mut seed, index, false, true);
    tile[..LINK_LEN].copy_from_slice(&first_link);

    for k in 1..LINK_COUNT {
        // `split_at_mut` gives two disjoint mutable views so the previous
        // link can be fed (and, per `tx = true`, scrambled in place) as
        // Nighthash's input while the next link is written elsewhere in
        // the same buffer.
        let (left, right) = tile.split_at_mut(k * LINK_LEN);
        let prev_link = &mut left[(k - 1) * LINK_LEN..k * LINK_LEN];
        let next_link = nighthash(prev_link, index, true, true);
        right[..LINK_LEN].copy_from_slice(&next_link);
    }

    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_byte_identical_across_invocations() {
        let phash = [0u8; 32];
        let a = generate_tile(&phash, 0);
        let b = generate_tile(&phash, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn index_boundaries_both_succeed() {
        let phash = [0xFFu8; 32];
        let first = generate_tile(&phash, 0);
        let last = generate_tile(&phash, 1_048_575);
        assert_ne!(first, last);
    }

    #[test]
    fn different_phash_gives_different_tile() {
        let a = generate_tile(&[0u8; 32], 5);
        let b = generate_tile(&[1u8; 32], 5);
        assert_ne!(a, b);
    }
}
