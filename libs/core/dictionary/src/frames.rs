// [libs/core/dictionary/src/frames.rs]
//! The 10 case frames (§3 "Frame", §4.2). Each frame is 16 `u32` slots; a
//! slot is zero (terminator — the remaining tokens must be `NIL`), an
//! `XLIT` literal (low byte selects a specific dictionary index), or a
//! feature mask the chosen word's features must intersect.
//!
//! Dictionary indices 204/206/207/208 are the literal splice tokens
//! (line break, `'s`, backspace-splice `'s`, backspace-splice `.`) defined
//! in [`crate::table`].

use crate::features::{self, XLIT};

const LINE_BREAK: u32 = XLIT | 204;
const APOSTROPHE_S: u32 = XLIT | 206;
const FULL_STOP: u32 = XLIT | 207;
const COMMA_SPLICE: u32 = XLIT | 208;

/// A 16-slot haiku template.
#[derive(Debug, Clone, Copy)]
pub struct Frame(pub [u32; 16]);

/// Number of case frames (§3).
pub const NFRAMES: usize = 10;

/// The static frame table. `trigg_generate_tokens` picks one uniformly;
/// `trigg_syntax` tries all ten in order and accepts on the first match.
pub static FRAMES: [Frame; NFRAMES] = [
    // 0: "<det> <adj> <ns> <ing>\n<det> <npl> <motion>\n<det> <adj> <ns>"
    Frame([
        features::DETS, features::ADJ, features::NS, features::ING, LINE_BREAK,
        features::DETPL, features::NPL, features::MOTION, LINE_BREAK,
        features::DETS, features::ADJ, features::NS,
        0, 0, 0, 0,
    ]),
    // 1: "<mass> <ing> <prep> <ns>\n<det> <adj> <ns> <ing>\n<ns> <motion>"
    Frame([
        features::MASS, features::ING, features::PREP, features::NS, LINE_BREAK,
        features::DETS, features::ADJ, features::NS, features::ING, LINE_BREAK,
        features::NS, features::MOTION,
        0, 0, 0, 0,
    ]),
    // 2: "at <timed> the <ns> <ing>\n<det> <adj> <npl>\n<ns> <ing> on <mass>"
    Frame([
        features::AT, features::TIMED, features::DETS, features::NS, features::ING, LINE_BREAK,
        features::DETS, features::ADJ, features::NPL, LINE_BREAK,
        features::NS, features::ING, features::ON, features::MASS,
        0, 0,
    ]),
    // 3: "<timey> <ns><'s> <adj> <ns>\n<det> <npl> <ing>\n<det> <adj> <ns>"
    Frame([
        features::TIMEY, features::NS, APOSTROPHE_S, features::ADJ, features::NS, LINE_BREAK,
        features::DETPL, features::NPL, features::ING, LINE_BREAK,
        features::DETS, features::ADJ, features::NS,
        0, 0, 0,
    ]),
    // 4: "<det> <adj> <ns> <motion>\nin <mass>, <adj> <npl>\n<det> <ns> <ing>"
    Frame([
        features::DETS, features::ADJ, features::NS, features::MOTION, LINE_BREAK,
        features::IN, features::MASS, COMMA_SPLICE, features::ADJ, features::NPL, LINE_BREAK,
        features::DETS, features::NS, features::ING,
        0, 0,
    ]),
    // 5: "<det> <npl> <ing> beyond <det> <ns>\n<adj> <mass>\n<det> <ns> <motion>"
    Frame([
        features::DETPL, features::NPL, features::ING, features::PREP, features::DETS, features::NS, LINE_BREAK,
        features::ADJ, features::MASS, LINE_BREAK,
        features::DETS, features::NS, features::MOTION,
        0, 0, 0,
    ]),
    // 6: "<ns> <ing> in <mass>\n<det> <adj> <ns><'s> <ns>\n<ns> <motion>"
    Frame([
        features::NS, features::ING, features::IN, features::MASS, LINE_BREAK,
        features::DETS, features::ADJ, features::NS, APOSTROPHE_S, features::NS, LINE_BREAK,
        features::NS, features::MOTION,
        0, 0, 0, 0,
    ]),
    // 7: "<det> <ns> and <ns> <ing>\n<adj> <npl> <motion>\n<det> <adj> <ns>."
    Frame([
        features::DETS, features::NS, features::OP, features::NS, features::ING, LINE_BREAK,
        features::ADJ, features::NPL, features::MOTION, LINE_BREAK,
        features::DETS, features::ADJ, features::NS, FULL_STOP,
        0, 0,
    ]),
    // 8: "<timed>, <adj> <mass>\n<det> <ns> <ing> on <ns>\n<det> <npl> <motion>"
    Frame([
        features::TIMED, COMMA_SPLICE, features::ADJ, features::MASS, LINE_BREAK,
        features::DETS, features::NS, features::ING, features::ON, features::NS, LINE_BREAK,
        features::DETPL, features::NPL, features::MOTION,
        0, 0,
    ]),
    // 9: shortest frame: "<det> <adj> <ns>\n<ns> <ing>\n<det> <ns> <motion>"
    Frame([
        features::DETS, features::ADJ, features::NS, LINE_BREAK,
        features::NS, features::ING, LINE_BREAK,
        features::DETS, features::NS, features::MOTION,
        0, 0, 0, 0, 0, 0,
    ]),
];
