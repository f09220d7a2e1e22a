// [libs/core/trigg/src/tokens.rs]
//! Haiku token generation, expansion and syntax checking (§4.2 / C3).

use rand_core::RngCore;
use trigpeach_dictionary::features::XLIT;
use trigpeach_dictionary::{lookup, DICTIONARY, FRAMES, NFRAMES};

/// `trigg_generate_tokens`: picks a frame uniformly at random and fills a
/// 16-byte token sequence, drawing dictionary indices until one satisfies
/// each slot. Zero slots still emit a zero byte rather than short-circuiting
/// the loop, so the full 16-byte array is always produced.
pub fn generate_tokens<R: RngCore + ?Sized>(rng: &mut R) -> [u8; 16] {
    let frame = &FRAMES[(rng.next_u32() as usize) % NFRAMES];
    let mut tokens = [0u8; 16];
    for (slot, &spec) in frame.0.iter().enumerate() {
        tokens[slot] = if spec == 0 {
            0
        } else if spec & XLIT != 0 {
            (spec & 0xFF) as u8
        } else {
            loop {
                let candidate = (rng.next_u32() % 256) as u8;
                if DICTIONARY[candidate as usize].features & spec != 0 {
                    break candidate;
                }
            }
        };
    }
    tokens
}

/// `trigg_expand`: renders a 16-byte token sequence into its 256-byte UTF-8
/// text form. A token whose first byte is a backspace (`\x08`) splices onto
/// the previously written text instead of appending after a space; a token
/// whose *own* last byte is `\n` suppresses the trailing space that would
/// otherwise follow it. Does not mutate `tokens`; the remainder of the
/// output buffer is zero-padded.
#[must_use]
pub fn expand(tokens: &[u8; 16]) -> [u8; 256] {
    let mut out = [0u8; 256];
    let mut pos = 0usize;
    for &index in tokens.iter() {
        if index == 0 {
            break;
        }
        let entry = lookup(index);
        let bytes = entry.token;
        if entry.is_backspace_splice() {
            if pos > 0 {
                pos -= 1;
            }
            let payload = &bytes[1..];
            out[pos..pos + payload.len()].copy_from_slice(payload);
            pos += payload.len();
        } else {
            out[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        }
        if bytes.last().copied() != Some(b'\n') {
            out[pos] = b' ';
            pos += 1;
        }
    }
    out
}

/// `trigg_syntax`: true iff the token sequence unifies with at least one
/// of the 10 case frames — every slot either matches a literal index, a
/// feature mask, or (for a zero slot) a `NIL` token.
#[must_use]
pub fn syntax(tokens: &[u8; 16]) -> bool {
    FRAMES.iter().any(|frame| {
        frame.0.iter().enumerate().all(|(slot, &spec)| {
            let entry = lookup(tokens[slot]);
            if spec == 0 {
                entry.features == 0
            } else if spec & XLIT != 0 {
                tokens[slot] == (spec & 0xFF) as u8
            } else {
                entry.features & spec != 0
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::TriggRng;

    #[test]
    fn generated_tokens_are_syntactically_valid() {
        let mut rng = TriggRng::new(1);
        for _ in 0..200 {
            let tokens = generate_tokens(&mut rng);
            assert!(syntax(&tokens), "tokens {:?} failed syntax check", tokens);
        }
    }

    #[test]
    fn empty_haiku_fails_syntax() {
        let tokens = [0u8; 16];
        // Every frame has at least one non-zero leading slot, so an
        // all-NIL sequence can only unify if some frame starts with a
        // zero slot — none do, by construction.
        assert!(!syntax(&tokens));
    }

    #[test]
    fn expand_does_not_mutate_tokens() {
        let mut rng = TriggRng::new(42);
        let tokens = generate_tokens(&mut rng);
        let before = tokens;
        let _ = expand(&tokens);
        assert_eq!(tokens, before);
    }

    #[test]
    fn backspace_splice_erases_preceding_space() {
        // index 43 = "moon" (NS), index 206 = "\x08's" (backspace splice).
        let mut tokens = [0u8; 16];
        tokens[0] = 43;
        tokens[1] = 206;
        let text = expand(&tokens);
        let end = text.iter().position(|&b| b == 0).unwrap_or(256);
        assert_eq!(&text[..end], b"moon's ");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rng::TriggRng;
    use proptest::prelude::*;

    proptest! {
        /// Syntax ⇔ generatable (spec §8): every sequence `generate_tokens`
        /// can produce, for any seed, unifies with some frame.
        #[test]
        fn every_generated_sequence_is_syntactically_valid(seed in any::<u32>()) {
            let mut rng = TriggRng::new(seed);
            let tokens = generate_tokens(&mut rng);
            prop_assert!(syntax(&tokens));
        }
    }
}
