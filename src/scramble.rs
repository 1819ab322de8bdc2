// SPDX-License-Identifier: PMPL-1.0-or-later

//! Word-level transforms: the seeded scrambler and the Draconic renderer.
//!
//! The scrambler re-clusters a word's mapped glyphs into variable-length
//! pieces joined by a middle dot. All of its randomness flows through an
//! injected [`RandomSource`]; the stable entry point
//! [`scramble_word_seeded`] derives the seed purely from
//! `(word, language name)`, so identical input reproduces identical output
//! across calls and processes.
//!
//! The Draconic renderer is the deliberate exception: driven by OS entropy
//! in production, its output is flavor text and not reproducible. Callers
//! that need determinism must not route words through it.

use crate::lexicon::{draconic_pool, map_letter, DRACONIC_TERMINAL, PIECE_DIACRITICS};
use crate::rng::{word_seed, RandomSource, SeededRng};
use crate::types::Language;

/// Scramble one word with a seed derived from the word and language name.
///
/// This is what the translator calls for every non-Draconic word.
pub fn scramble_word_seeded(word: &str, language: Language) -> String {
    let mut rng = SeededRng::new(word_seed(word, language.name()));
    scramble_word(word, language, &mut rng)
}

/// Scramble one word, drawing every random choice from `rng`.
///
/// The word's letters are first mapped through the language's glyph table;
/// the mapped glyphs form a pool that is then dealt back out, without
/// replacement, across a cluster count proportional to word length.
/// Non-letter characters stay at their position unchanged, which is what
/// keeps digits and embedded punctuation visible in the output. Pieces
/// join on `·` so the word keeps a visible internal structure.
///
/// Empty word → empty string. Pure given the rng.
pub fn scramble_word(word: &str, language: Language, rng: &mut impl RandomSource) -> String {
    if word.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    // Multiset of the word's own mapped glyphs, sampled without
    // replacement below. Only letters contribute; everything else passes
    // through positionally.
    let mut pool: Vec<String> = chars
        .iter()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|&c| map_letter(c, language))
        .collect();

    let spread = rng.next_below(3);
    let clusters = ((len as f64 / (1.0 + spread as f64)).round() as usize).max(1);

    let mut pieces: Vec<String> = Vec::with_capacity(clusters);
    let mut pos = 0;
    for i in 0..clusters {
        let remaining = len - pos;
        if remaining == 0 {
            break;
        }
        let clusters_left = clusters - i;
        let take = if i + 1 == clusters {
            remaining
        } else {
            let base = remaining / clusters_left;
            (base + rng.next_below(2)).clamp(1, remaining)
        };

        let mut piece = String::new();
        for &ch in &chars[pos..pos + take] {
            if ch.is_ascii_alphabetic() {
                if pool.is_empty() {
                    // Exhausted pool: fall back to the original character.
                    piece.push(ch);
                } else {
                    let idx = rng.next_below(pool.len());
                    piece.push_str(&pool.swap_remove(idx));
                }
            } else {
                piece.push(ch);
            }
        }
        pos += take;

        if rng.chance(0.25) {
            piece.push_str(PIECE_DIACRITICS[rng.next_below(PIECE_DIACRITICS.len())]);
        }
        if rng.chance(0.2) {
            piece = piece.chars().rev().collect();
        }
        pieces.push(piece);
    }

    pieces.join("·")
}

/// Render one word in dragon script.
///
/// Strokes are sampled from the Draconic pool, sized proportionally to the
/// word, and closed with the fixed terminal stroke. Non-reproducible when
/// driven by [`crate::rng::EntropyRng`], which is the production wiring;
/// two renderings of the same word may differ and that is intended.
pub fn render_draconic_word(word: &str, rng: &mut impl RandomSource) -> String {
    if word.is_empty() {
        return String::new();
    }

    let len = word.chars().count();
    let pool = draconic_pool();
    let strokes = (len + rng.next_below(3)).max(2);

    let mut out = String::new();
    for _ in 0..strokes {
        out.push_str(pool[rng.next_below(pool.len())]);
    }
    out.push_str(DRACONIC_TERMINAL);
    out
}
