// [libs/domain/peach/src/lib.rs]
//! The Peach orchestrator (C8): the memory-hard PoW layered on top of
//! Trigg. A `Peach` context owns an optional 1 GiB map, walks it 8 hops
//! per `generate` attempt, and is freed exactly once per mining session.
//! `peach_check` is a pure function that never allocates the map — every
//! visited tile is regenerated on the fly into a single 1 KiB scratch
//! buffer (§4.7).

mod mario;

pub use mario::mario;

use rand_core::RngCore;
use thiserror::Error;
use tracing::{debug, instrument, trace};

use trigpeach_hashes::{digest32, Algorithm};
use trigpeach_tilemap::{generate_tile, next_index, PeachMap, TileMapError, TILE_LEN};
use trigpeach_trigg::{difficulty::eval, tokens::generate_tokens, tokens::syntax, BlockTrailer};

#[cfg(feature = "static-map")]
use std::sync::{Mutex, OnceLock};

/// Failure surface for [`Peach::solve`]. The only failure mode the core
/// specifies is allocation failure (§7).
#[derive(Debug, Error)]
pub enum PeachError {
    #[error("failed to allocate Peach map: {0}")]
    AllocationFailure(#[from] TileMapError),
}

/// Emitted once per [`Peach::generate`] call via a `tracing` event — not a
/// channel, since the core has no networking surface. Lets a caller derive
/// a hashrate without the core knowing anything about how it is displayed.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    /// Tiles visited this round: the `mario` start tile plus 8 hops.
    pub tiles_visited: u32,
    /// Worst-case Nighthash invocations for this round (32 per tile,
    /// times tiles visited) — an upper bound, since cache hits in a
    /// solver context skip generation entirely.
    pub nighthash_calls: u32,
    pub difficulty: u8,
    pub found: bool,
}

const HOPS_PER_ROUND: u32 = 8;
const TILES_PER_ROUND: u32 = HOPS_PER_ROUND + 1;
const NIGHTHASH_CALLS_PER_TILE: u32 = 32;

#[cfg(feature = "static-map")]
static STATIC_MAP: OnceLock<Mutex<Option<PeachMap>>> = OnceLock::new();

/// A Peach mining context (§3 "Peach context", §4.8 "State machine").
/// `Uninit` is represented by not having a `Peach` value at all —
/// [`Peach::solve`] is the only constructor, and returns a context already
/// in `Ready` state. Every `generate` call leaves the context `Ready`;
/// [`Peach::free`] moves it to `Freed`, after which `generate` is a no-op
/// and a second `free` call is harmless.
pub struct Peach {
    phash: [u8; 32],
    diff: u8,
    map: Option<PeachMap>,
    scratch_tile: [u8; TILE_LEN],
    nonce: [u8; 32],
    freed: bool,
}

impl Peach {
    /// `peach_solve`: allocates the map and cache bitmap, binds the
    /// context to `bt`'s `phash`/`difficulty`, and seeds the nonce's
    /// upper half (quadwords `[2..4]`, i.e. bytes `[16..32]`) with a
    /// freshly drawn haiku (§4.7).
    #[instrument(skip(bt, rng))]
    pub fn solve<R: RngCore + ?Sized>(bt: &BlockTrailer, rng: &mut R) -> Result<Self, PeachError> {
        let map = Self::acquire_map(bt.phash())?;
        let mut nonce = [0u8; 32];
        nonce[16..].copy_from_slice(&generate_tokens(rng));

        debug!(phash = ?bt.phash(), diff = bt.difficulty_threshold(), "peach context ready");
        Ok(Self {
            phash: bt.phash(),
            diff: bt.difficulty_threshold(),
            map: Some(map),
            scratch_tile: [0u8; TILE_LEN],
            nonce,
            freed: false,
        })
    }

    /// `peach_generate`: rolls the previous round's freshly drawn haiku
    /// into the nonce's lower half, draws a new upper half, walks the map
    /// 8 hops from `mario`, and reports whether the resulting hash meets
    /// the context's difficulty.
    #[instrument(skip(self, bt, rng, out))]
    pub fn generate<R: RngCore + ?Sized>(
        &mut self,
        bt: &BlockTrailer,
        rng: &mut R,
        out: &mut [u8; 32],
    ) -> bool {
        if self.freed {
            return false;
        }

        self.nonce.copy_within(16..32, 0);
        self.nonce[16..].copy_from_slice(&generate_tokens(rng));

        let mut preimage = [0u8; 92 + 32];
        preimage[..92].copy_from_slice(bt.prefix_92());
        preimage[92..].copy_from_slice(&self.nonce);
        let bt_hash = digest32(Algorithm::Sha256, &preimage, None);

        let nonce = self.nonce;
        let hash = self.walk(&bt_hash, &nonce);

        let found = eval(&hash, self.diff as u16);
        let report = ProgressReport {
            tiles_visited: TILES_PER_ROUND,
            nighthash_calls: TILES_PER_ROUND * NIGHTHASH_CALLS_PER_TILE,
            difficulty: self.diff,
            found,
        };
        trace!(
            tiles_visited = report.tiles_visited,
            nighthash_calls = report.nighthash_calls,
            difficulty = report.difficulty,
            found = report.found,
            "peach progress"
        );
        if found {
            *out = self.nonce;
        }
        found
    }

    /// `peach_free`: releases the map (or, under `static-map`, returns it
    /// to the process-wide slot) and marks the context spent. Safe to
    /// call more than once.
    pub fn free(&mut self) {
        if let Some(map) = self.map.take() {
            Self::release_map(map);
        }
        self.freed = true;
    }

    /// Runs the shared 8-hop walk from `mario(bt_hash)` and returns the
    /// final `SHA256(bt_hash ‖ tile)`, generating tiles through the map
    /// when present or into the scratch buffer otherwise.
    fn walk(&mut self, bt_hash: &[u8; 32], nonce: &[u8; 32]) -> [u8; 32] {
        let mut index = mario(bt_hash);
        let mut tile = *self.fetch_or_generate(index);
        for _ in 0..8 {
            index = next_index(index, &tile, nonce);
            tile = *self.fetch_or_generate(index);
        }

        let mut final_in = [0u8; 32 + TILE_LEN];
        final_in[..32].copy_from_slice(bt_hash);
        final_in[32..].copy_from_slice(&tile);
        digest32(Algorithm::Sha256, &final_in, None)
    }

    fn fetch_or_generate(&mut self, index: u32) -> &[u8; TILE_LEN] {
        match &mut self.map {
            Some(map) => map.fetch_or_generate(index),
            None => {
                self.scratch_tile = generate_tile(&self.phash, index);
                &self.scratch_tile
            }
        }
    }

    #[cfg(feature = "static-map")]
    fn acquire_map(phash: [u8; 32]) -> Result<PeachMap, PeachError> {
        let cell = STATIC_MAP.get_or_init(|| Mutex::new(None));
        let mut guard = cell.lock().expect("static Peach map mutex poisoned");
        if let Some(mut map) = guard.take() {
            map.reset(phash);
            Ok(map)
        } else {
            drop(guard);
            Ok(PeachMap::new(phash)?)
        }
    }

    #[cfg(not(feature = "static-map"))]
    fn acquire_map(phash: [u8; 32]) -> Result<PeachMap, PeachError> {
        Ok(PeachMap::new(phash)?)
    }

    #[cfg(feature = "static-map")]
    fn release_map(map: PeachMap) {
        if let Some(cell) = STATIC_MAP.get() {
            if let Ok(mut guard) = cell.lock() {
                *guard = Some(map);
            }
        }
    }

    #[cfg(not(feature = "static-map"))]
    fn release_map(map: PeachMap) {
        drop(map);
    }
}

/// `peach_check`: pure; verifies both haiku halves' syntax, then replays
/// the same walk `generate` would have performed, with no cache and no
/// nonce regeneration. Hashes the trailer's first 124 bytes (through
/// `nonce`, skipping `stime`) rather than `prefix_92 ‖ nonce` — the two
/// happen to be byte-identical since the nonce sits at `[92..124]`, but
/// the distinction is the protocol-observable asymmetry called out in
/// the Open Questions.
#[must_use]
pub fn peach_check(bt: &BlockTrailer) -> bool {
    peach_check_with_hash(bt, None)
}

/// As [`peach_check`], but also writes the final 32-byte hash to `out`
/// when provided (§4.7: "if `out` is non-null, copy it there").
#[instrument(skip(bt, out))]
pub fn peach_check_with_hash(bt: &BlockTrailer, mut out: Option<&mut [u8; 32]>) -> bool {
    let nonce = bt.nonce();
    let primary: [u8; 16] = nonce[..16].try_into().expect("16 bytes");
    let secondary: [u8; 16] = nonce[16..].try_into().expect("16 bytes");
    if !syntax(&primary) || !syntax(&secondary) {
        return false;
    }

    let bt_hash = digest32(Algorithm::Sha256, bt.prefix_124(), None);
    let phash = bt.phash();

    let mut index = mario(&bt_hash);
    let mut tile = generate_tile(&phash, index);
    for _ in 0..8 {
        index = next_index(index, &tile, &nonce);
        tile = generate_tile(&phash, index);
    }

    let mut final_in = [0u8; 32 + TILE_LEN];
    final_in[..32].copy_from_slice(&bt_hash);
    final_in[32..].copy_from_slice(&tile);
    let hash = digest32(Algorithm::Sha256, &final_in, None);

    if let Some(o) = out.as_deref_mut() {
        *o = hash;
    }
    eval(&hash, bt.difficulty_threshold() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigpeach_trigg::rng::TriggRng;
    use trigpeach_trigg::trailer::TRAILER_LEN;

    #[test]
    fn solve_then_generate_round_trips_through_check() {
        let mut bytes = [0u8; TRAILER_LEN];
        bytes[56] = 1; // difficulty[56..60] little-endian: low byte is the threshold
        let mut bt = BlockTrailer::from_bytes(bytes);

        let mut rng = TriggRng::new(1);
        let mut ctx = Peach::solve(&bt, &mut rng).expect("allocation should succeed");
        let mut nonce = [0u8; 32];
        let mut found = false;
        for _ in 0..10_000 {
            if ctx.generate(&bt, &mut rng, &mut nonce) {
                found = true;
                break;
            }
        }
        assert!(found, "difficulty 1 should be found quickly");

        bt.set_nonce(nonce);
        assert!(peach_check(&bt));
        ctx.free();
        ctx.free(); // safe to call twice
    }

    #[test]
    fn generate_after_free_is_a_harmless_no_op() {
        let mut bytes = [0u8; TRAILER_LEN];
        bytes[56] = 1;
        let bt = BlockTrailer::from_bytes(bytes);
        let mut rng = TriggRng::new(7);
        let mut ctx = Peach::solve(&bt, &mut rng).unwrap();
        ctx.free();

        let mut out = [0u8; 32];
        assert!(!ctx.generate(&bt, &mut rng, &mut out));
    }

    #[test]
    fn check_reports_the_same_hash_on_repeated_calls() {
        let mut bytes = [0u8; TRAILER_LEN];
        bytes[56] = 1;
        let mut bt = BlockTrailer::from_bytes(bytes);
        let mut rng = TriggRng::new(3);
        let mut ctx = Peach::solve(&bt, &mut rng).unwrap();
        let mut nonce = [0u8; 32];
        while !ctx.generate(&bt, &mut rng, &mut nonce) {}
        bt.set_nonce(nonce);

        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        assert!(peach_check_with_hash(&bt, Some(&mut first)));
        assert!(peach_check_with_hash(&bt, Some(&mut second)));
        assert_eq!(first, second);
    }

    #[test]
    fn an_empty_haiku_fails_syntax_before_any_hashing() {
        let bytes = [0u8; TRAILER_LEN]; // nonce is all zero: empty haiku
        let bt = BlockTrailer::from_bytes(bytes);
        assert!(!peach_check(&bt));
    }
}
