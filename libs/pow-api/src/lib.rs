// [libs/pow-api/src/lib.rs]
//! Public facade over the Trigg and Peach proof-of-work cores (§6
//! "External interfaces"). Downstream crates — miners, verifiers, the
//! demo binary — should depend on this crate rather than reaching into
//! the individual core crates directly.

pub mod prelude;

pub use trigpeach_hashes::{digest32, Algorithm};
pub use trigpeach_peach::{peach_check, peach_check_with_hash, Peach, PeachError, ProgressReport};
pub use trigpeach_trigg::{BlockTrailer, TriggContext, TriggRng, TRAILER_LEN};

use rand_core::RngCore;

/// `trigg_check(bt) -> bool`: pure; true iff `bt.nonce` satisfies the
/// Trigg PoW predicate at `bt.difficulty[0]`.
#[must_use]
pub fn trigg_check(bt: &BlockTrailer) -> bool {
    trigpeach_trigg::trigg_check(bt)
}

/// `trigg_solve(bt) -> TriggContext`: initializes a Trigg context from a
/// trailer. The spec's `trigg_solve(T, bt)` takes an out-parameter `T`;
/// idiomatic Rust returns the freshly built context instead.
#[must_use]
pub fn trigg_solve(bt: &BlockTrailer) -> TriggContext {
    TriggContext::solve(bt)
}

/// `trigg_generate(T, out) -> bool`: attempts one nonce against `ctx`,
/// writing it to `out` on success.
pub fn trigg_generate<R: RngCore + ?Sized>(
    ctx: &mut TriggContext,
    rng: &mut R,
    out: &mut [u8; 32],
) -> bool {
    ctx.generate(rng, out)
}

/// `peach_solve(P, bt) -> int`: allocates a Peach context for `bt`. The
/// spec returns `0` on success via an out-parameter `P`; idiomatic Rust
/// returns `Result<Peach, PeachError>` instead, which collapses to the
/// same two outcomes.
pub fn peach_solve<R: RngCore + ?Sized>(
    bt: &BlockTrailer,
    rng: &mut R,
) -> Result<Peach, PeachError> {
    Peach::solve(bt, rng)
}

/// `peach_generate(P, out) -> bool`: attempts one Peach round against
/// `ctx`, writing the winning nonce to `out` on success.
pub fn peach_generate<R: RngCore + ?Sized>(
    ctx: &mut Peach,
    bt: &BlockTrailer,
    rng: &mut R,
    out: &mut [u8; 32],
) -> bool {
    ctx.generate(bt, rng, out)
}

/// `peach_free(P) -> void`: releases `ctx`'s map. Safe to call more than
/// once.
pub fn peach_free(ctx: &mut Peach) {
    ctx.free();
}
