// [apps/miner-demo/src/main.rs]
//! Demo CLI: spins up `N` independent Peach mining workers against a
//! synthetic block trailer and reports the first nonce each one finds.
//! Every worker owns its own `Peach` context and its own seeded PRNG —
//! there is no shared mutable state across workers, matching the core's
//! concurrency model (§5).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use trigpeach_api::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "miner-demo",
    about = "Run independent Peach mining workers against a synthetic trailer"
)]
struct Cli {
    /// Number of independent worker threads; defaults to the number of
    /// logical CPUs.
    #[arg(long)]
    workers: Option<usize>,

    /// Leading-zero-bit difficulty threshold (`bt.difficulty[0]`).
    #[arg(long, default_value_t = 16)]
    difficulty: u8,

    /// Upper bound on `generate` attempts per worker before giving up.
    #[arg(long, default_value_t = 2_000_000)]
    max_attempts: u64,

    /// Hex-encoded 32-byte previous-block hash; defaults to all zeros.
    #[arg(long)]
    phash: Option<String>,

    /// Base seed for each worker's word-chooser PRNG; worker `i` is seeded
    /// with `seed ^ i` (§9 "Concurrency seed": distinct per-worker state).
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

fn build_trailer(phash_hex: &Option<String>, difficulty: u8) -> anyhow::Result<BlockTrailer> {
    let mut bytes = [0u8; TRAILER_LEN];
    if let Some(hex_str) = phash_hex {
        let phash = hex::decode(hex_str)?;
        anyhow::ensure!(phash.len() == 32, "phash must be exactly 32 bytes of hex");
        bytes[..32].copy_from_slice(&phash);
    }
    bytes[56] = difficulty; // difficulty[56..60], little-endian: low byte is bt.difficulty_threshold()
    Ok(BlockTrailer::from_bytes(bytes))
}

fn run_worker(id: usize, bt: BlockTrailer, seed: u32, max_attempts: u64, found: Arc<AtomicU64>) {
    let mut rng = TriggRng::new(seed ^ id as u32);
    let mut ctx = match peach_solve(&bt, &mut rng) {
        Ok(ctx) => ctx,
        Err(err) => {
            warn!(worker = id, %err, "worker failed to allocate its Peach map");
            return;
        }
    };

    let mut nonce = [0u8; 32];
    let mut attempts = 0u64;
    while attempts < max_attempts {
        attempts += 1;
        if peach_generate(&mut ctx, &bt, &mut rng, &mut nonce) {
            found.fetch_add(1, Ordering::Relaxed);
            info!(
                worker = id,
                attempts,
                nonce = %hex::encode(nonce),
                "found a nonce meeting difficulty"
            );
            break;
        }
    }
    peach_free(&mut ctx);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let worker_count = cli.workers.unwrap_or_else(num_cpus::get);
    let bt = build_trailer(&cli.phash, cli.difficulty)?;

    info!(
        workers = worker_count,
        difficulty = cli.difficulty,
        "starting Peach mining demo"
    );

    let found = Arc::new(AtomicU64::new(0));
    let started = Instant::now();

    let handles: Vec<_> = (0..worker_count)
        .map(|id| {
            let bt = bt;
            let found = Arc::clone(&found);
            let seed = cli.seed;
            let max_attempts = cli.max_attempts;
            thread::spawn(move || run_worker(id, bt, seed, max_attempts, found))
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            warn!("a worker thread panicked");
        }
    }

    info!(
        elapsed_ms = started.elapsed().as_millis(),
        winners = found.load(Ordering::Relaxed),
        "mining demo finished"
    );
    Ok(())
}
