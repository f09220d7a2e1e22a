// [libs/pow-api/src/prelude.rs]
//! `use trigpeach_api::prelude::*;` pulls in everything a typical miner
//! or verifier needs: the trailer view, both contexts, and the six
//! `trigg_*`/`peach_*` entry points.

pub use crate::{
    peach_check, peach_free, peach_generate, peach_solve, trigg_check, trigg_generate,
    trigg_solve, BlockTrailer, Peach, PeachError, TriggContext, TriggRng, TRAILER_LEN,
};
pub use rand_core::RngCore;
