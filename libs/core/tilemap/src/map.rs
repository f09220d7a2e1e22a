// [libs/core/tilemap/src/map.rs]
//! The map + presence bitmap (§3 "Peach context", §9 "Ownership of large
//! buffers"). One contiguous allocation for the 1 GiB tile map, one for
//! the presence bitmap — never fragmented into per-tile allocations. The
//! bitmap is one bit per tile (128 KiB at the full 2^20 tile count), which
//! the Design Notes call out as "acceptable and preferable" over a
//! byte-per-tile table.

use crate::index_jump::TILE_COUNT;
use crate::tile::{generate_tile, TILE_LEN};
use thiserror::Error;
use tracing::debug;

/// Failure surface for map construction. The only failure mode the core
/// specifies is allocation failure (§7).
#[derive(Debug, Error)]
pub enum TileMapError {
    #[error("failed to allocate {bytes} bytes for the tile map")]
    AllocationFailure { bytes: usize },
}

/// The 1 GiB map and its presence bitmap, keyed to one `phash`. Between
/// construction and drop the map is append-only: presence bits transition
/// `0 -> 1` and never back (§3 "Lifecycles").
pub struct PeachMap {
    phash: [u8; 32],
    tile_count: usize,
    map: Box<[u8]>,
    bitmap: Box<[u8]>,
}

impl PeachMap {
    /// Allocates a map sized for the full, spec-mandated 2^20 tiles.
    pub fn new(phash: [u8; 32]) -> Result<Self, TileMapError> {
        Self::with_tile_count(phash, TILE_COUNT)
    }

    /// Allocates a map for an arbitrary tile count — used by tests and
    /// benchmarks that cannot afford a literal 1 GiB allocation; production
    /// callers should use [`Self::new`].
    pub fn with_tile_count(phash: [u8; 32], tile_count: usize) -> Result<Self, TileMapError> {
        let map_len = tile_count
            .checked_mul(TILE_LEN)
            .ok_or(TileMapError::AllocationFailure { bytes: usize::MAX })?;
        let bitmap_len = tile_count.div_ceil(8);

        let map = allocate_zeroed(map_len)?;
        let bitmap = allocate_zeroed(bitmap_len)?;

        debug!(map_len, bitmap_len, "allocated Peach map");
        Ok(Self {
            phash,
            tile_count,
            map,
            bitmap,
        })
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    #[must_use]
    pub fn phash(&self) -> [u8; 32] {
        self.phash
    }

    /// Rebinds an already-allocated map to a new `phash` and clears every
    /// presence bit, without touching the underlying allocation. Lets a
    /// `static-map` build reuse one process-wide buffer across solves
    /// instead of allocating a fresh 1 GiB region each time.
    pub fn reset(&mut self, phash: [u8; 32]) {
        self.phash = phash;
        self.bitmap.fill(0);
    }

    #[must_use]
    fn is_present(&self, index: usize) -> bool {
        (self.bitmap[index / 8] >> (index % 8)) & 1 == 1
    }

    fn mark_present(&mut self, index: usize) {
        self.bitmap[index / 8] |= 1 << (index % 8);
    }

    /// `fetch_or_generate`: returns the tile at `index`, generating and
    /// caching it on first access. Subsequent calls for the same index are
    /// pure reads (§4.7).
    pub fn fetch_or_generate(&mut self, index: u32) -> &[u8; TILE_LEN] {
        let i = index as usize;
        if !self.is_present(i) {
            let tile = generate_tile(&self.phash, index);
            self.map[i * TILE_LEN..(i + 1) * TILE_LEN].copy_from_slice(&tile);
            self.mark_present(i);
        }
        (&self.map[i * TILE_LEN..(i + 1) * TILE_LEN])
            .try_into()
            .expect("tile slice is exactly TILE_LEN bytes")
    }
}

fn allocate_zeroed(len: usize) -> Result<Box<[u8]>, TileMapError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| TileMapError::AllocationFailure { bytes: len })?;
    buf.resize(len, 0);
    Ok(buf.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refetching_the_same_tile_leaves_the_map_unchanged() {
        let mut map = PeachMap::with_tile_count([0u8; 32], 16).unwrap();
        let first = *map.fetch_or_generate(3);
        let second = *map.fetch_or_generate(3);
        assert_eq!(first, second);
    }

    #[test]
    fn presence_bit_is_set_after_fetch() {
        let mut map = PeachMap::with_tile_count([1u8; 32], 16).unwrap();
        assert!(!map.is_present(4));
        let _ = map.fetch_or_generate(4);
        assert!(map.is_present(4));
    }

    #[test]
    fn cached_tile_matches_a_fresh_direct_generation() {
        let phash = [5u8; 32];
        let mut map = PeachMap::with_tile_count(phash, 16).unwrap();
        let cached = *map.fetch_or_generate(2);
        let direct = generate_tile(&phash, 2);
        assert_eq!(cached, direct);
    }
}
