// [libs/core/dictionary/src/features.rs]
//! Feature bitmask constants shared by [`DictionaryEntry::features`] and
//! [`Frame`](crate::Frame) slot masks (§3 "DictionaryEntry", "Frame").
//!
//! A word "has" a feature when the corresponding bit is set; a frame slot
//! matches a word when `slot_mask & word.features != 0`. `XLIT` is not a
//! word feature at all — it tags a *slot* as "this position is a specific
//! dictionary index, not a feature class" and is never set on a
//! [`DictionaryEntry`].

pub const ING: u32 = 1 << 0;
pub const INF: u32 = 1 << 1;
pub const MOTION: u32 = 1 << 2;
pub const NS: u32 = 1 << 3;
pub const NPL: u32 = 1 << 4;
pub const MASS: u32 = 1 << 5;
pub const AMB: u32 = 1 << 6;
pub const TIMED: u32 = 1 << 7;
pub const TIMEY: u32 = 1 << 8;
pub const AT: u32 = 1 << 9;
pub const ON: u32 = 1 << 10;
pub const IN: u32 = 1 << 11;
pub const PREP: u32 = 1 << 12;
pub const ADJ: u32 = 1 << 13;
pub const OP: u32 = 1 << 14;
pub const DETS: u32 = 1 << 15;
pub const DETPL: u32 = 1 << 16;

/// Slot-type discriminator: when set on a [`Frame`](crate::Frame) slot, the
/// low byte of the slot is a literal dictionary index rather than a feature
/// mask to intersect against.
pub const XLIT: u32 = 1 << 31;
