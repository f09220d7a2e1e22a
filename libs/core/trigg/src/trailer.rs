// [libs/core/trigg/src/trailer.rs]
//! `BlockTrailer` (§3): a fixed 160-byte, little-endian-field byte layout.
//! Treated as an opaque array by the core except for the five named fields
//! it reads (`phash`, `difficulty`, `mroot`, `bnum`, `nonce`) and the one
//! it writes (`nonce`). Block-trailer serialization beyond this byte
//! layout is out of scope (§1) — this type never parses or emits wire
//! framing, only offsets into an already-assembled buffer.

/// Total length of a block trailer, in bytes.
pub const TRAILER_LEN: usize = 160;

const PHASH: std::ops::Range<usize> = 0..32;
const BNUM: std::ops::Range<usize> = 32..40;
const MFEE: std::ops::Range<usize> = 40..48;
const TCOUNT: std::ops::Range<usize> = 48..52;
const TIME0: std::ops::Range<usize> = 52..56;
const DIFFICULTY: std::ops::Range<usize> = 56..60;
const MROOT: std::ops::Range<usize> = 60..92;
const NONCE: std::ops::Range<usize> = 92..124;
const STIME: std::ops::Range<usize> = 124..128;
const BHASH: std::ops::Range<usize> = 128..160;

/// A 160-byte block trailer, indexed by the named offsets of §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTrailer([u8; TRAILER_LEN]);

impl BlockTrailer {
    #[must_use]
    pub fn from_bytes(bytes: [u8; TRAILER_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; TRAILER_LEN] {
        &self.0
    }

    /// `phash[0..32]`: previous block hash, the seed for the Peach map.
    #[must_use]
    pub fn phash(&self) -> [u8; 32] {
        self.0[PHASH].try_into().expect("range is 32 bytes")
    }

    /// `bnum[32..40]`, little-endian block number.
    #[must_use]
    pub fn bnum_bytes(&self) -> [u8; 8] {
        self.0[BNUM].try_into().expect("range is 8 bytes")
    }

    #[must_use]
    pub fn bnum(&self) -> u64 {
        u64::from_le_bytes(self.bnum_bytes())
    }

    #[must_use]
    pub fn mfee(&self) -> u64 {
        u64::from_le_bytes(self.0[MFEE].try_into().expect("range is 8 bytes"))
    }

    #[must_use]
    pub fn tcount(&self) -> u32 {
        u32::from_le_bytes(self.0[TCOUNT].try_into().expect("range is 4 bytes"))
    }

    #[must_use]
    pub fn time0(&self) -> u32 {
        u32::from_le_bytes(self.0[TIME0].try_into().expect("range is 4 bytes"))
    }

    /// `difficulty[56..60]`, little-endian. Only the low byte is consulted
    /// by the difficulty predicate; see [`Self::difficulty_threshold`].
    #[must_use]
    pub fn difficulty_field(&self) -> u32 {
        u32::from_le_bytes(self.0[DIFFICULTY].try_into().expect("range is 4 bytes"))
    }

    /// `bt.difficulty[0]` — the leading-zero-bit threshold `eval` checks
    /// against (§6: "at `bt.difficulty[0]`").
    #[must_use]
    pub fn difficulty_threshold(&self) -> u8 {
        self.0[DIFFICULTY.start]
    }

    /// `mroot[60..92]`: Merkle root of the block's transactions.
    #[must_use]
    pub fn mroot(&self) -> [u8; 32] {
        self.0[MROOT].try_into().expect("range is 32 bytes")
    }

    /// `nonce[92..124]`: the sole field the core writes.
    #[must_use]
    pub fn nonce(&self) -> [u8; 32] {
        self.0[NONCE].try_into().expect("range is 32 bytes")
    }

    pub fn set_nonce(&mut self, nonce: [u8; 32]) {
        self.0[NONCE].copy_from_slice(&nonce);
    }

    #[must_use]
    pub fn stime(&self) -> u32 {
        u32::from_le_bytes(self.0[STIME].try_into().expect("range is 4 bytes"))
    }

    #[must_use]
    pub fn bhash(&self) -> [u8; 32] {
        self.0[BHASH].try_into().expect("range is 32 bytes")
    }

    /// The first 92 bytes of the trailer (through `tcount`/`time0`, up to
    /// but excluding `difficulty`... actually through the end of `mroot`'s
    /// predecessor fields up to the nonce) — used by `peach_generate`'s
    /// `bt_hash = SHA256(bt[0..92] ‖ nonce)` (§4.7).
    #[must_use]
    pub fn prefix_92(&self) -> &[u8] {
        &self.0[..92]
    }

    /// The first 124 bytes of the trailer (through `nonce`, skipping
    /// `stime`) — used by `peach_check`'s `bt_hash = SHA256(bt[0..124])`
    /// (§4.7, and the Open Question in §9 preserving this asymmetry).
    #[must_use]
    pub fn prefix_124(&self) -> &[u8] {
        &self.0[..124]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_offsets_round_trip() {
        let mut bytes = [0u8; TRAILER_LEN];
        bytes[0] = 0xAB;
        bytes[59] = 18;
        bytes[123] = 0xCD;
        let bt = BlockTrailer::from_bytes(bytes);
        assert_eq!(bt.phash()[0], 0xAB);
        assert_eq!(bt.difficulty_field(), 18 << 24);
        assert_eq!(bt.nonce()[31], 0xCD);
    }

    #[test]
    fn prefix_92_and_124_concatenation_equivalence_holds() {
        // §9 Open Question: concatenating prefix_92 with the nonce must
        // equal prefix_124 exactly, because the nonce sits at [92..124].
        let mut bytes = [0u8; TRAILER_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let bt = BlockTrailer::from_bytes(bytes);
        let mut reconstructed = bt.prefix_92().to_vec();
        reconstructed.extend_from_slice(&bt.nonce());
        assert_eq!(reconstructed, bt.prefix_124());
    }
}
