// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language static data for the fantasy-language transform.
//!
//! Embeds every glyph map, the Draconic glyph pool, and the pronunciation
//! syllable pools as compile-time tables. Lookup is a direct index on the
//! letter for glyph maps and a match dispatch per language — no file I/O,
//! no allocation beyond the returned glyph strings.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`crate::types::Language`] and wire its
//!    `name`/`from_name`/`all` arms
//! 2. Add a 26-entry `const XX_GLYPHS` table to `glyphs.rs` (or a pool,
//!    if the language is meant to be non-positional like Draconic)
//! 3. Add a 10–15 entry syllable pool to `syllables.rs`
//! 4. Extend the `glyph_table` and `syllable_pool` dispatch below

mod glyphs;
mod syllables;

pub use glyphs::{draconic_pool, glyph_table, DRACONIC_TERMINAL, PIECE_DIACRITICS};
pub use syllables::syllable_pool;

use crate::types::Language;

/// Substitute a single letter with its per-language glyph.
///
/// Case-insensitive on `[a-zA-Z]`; any other character (digits,
/// punctuation, whitespace, non-ASCII) passes through unchanged. Draconic
/// has no letter map, so every character passes through — its rendering
/// goes through the glyph pool instead.
pub fn map_letter(ch: char, language: Language) -> String {
    if let Some(table) = glyph_table(language) {
        if ch.is_ascii_alphabetic() {
            let idx = (ch.to_ascii_lowercase() as u8 - b'a') as usize;
            return table[idx].to_string();
        }
    }
    ch.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_maps_are_total_over_the_alphabet() {
        for lang in Language::all() {
            let Some(table) = glyph_table(*lang) else {
                assert_eq!(*lang, Language::Draconic);
                continue;
            };
            for (i, glyph) in table.iter().enumerate() {
                assert!(
                    !glyph.is_empty(),
                    "{lang} has no glyph for {}",
                    (b'a' + i as u8) as char
                );
            }
        }
    }

    #[test]
    fn map_letter_is_case_insensitive() {
        for lang in Language::all() {
            if *lang == Language::Draconic {
                continue;
            }
            assert_eq!(map_letter('a', *lang), map_letter('A', *lang));
            assert_eq!(map_letter('z', *lang), map_letter('Z', *lang));
        }
    }

    #[test]
    fn map_letter_substitutes_letters() {
        // A mapped letter must not survive as itself.
        for lang in Language::all() {
            if *lang == Language::Draconic {
                continue;
            }
            for ch in 'a'..='z' {
                assert_ne!(map_letter(ch, *lang), ch.to_string(), "{lang}: {ch}");
            }
        }
    }

    #[test]
    fn non_letters_pass_through() {
        for lang in Language::all() {
            for ch in ['7', ' ', '.', '!', 'é', '·', '\n'] {
                assert_eq!(map_letter(ch, *lang), ch.to_string(), "{lang}: {ch:?}");
            }
        }
    }

    #[test]
    fn draconic_has_pool_not_map() {
        assert!(glyph_table(Language::Draconic).is_none());
        assert!(draconic_pool().len() >= 8);
        assert_eq!(map_letter('a', Language::Draconic), "a");
    }

    #[test]
    fn syllable_pools_within_spec_size() {
        for lang in Language::all() {
            let pool = syllable_pool(*lang);
            assert!(
                (10..=15).contains(&pool.len()),
                "{lang} pool has {} syllables",
                pool.len()
            );
            assert!(pool.iter().all(|s| !s.is_empty() && s.len() <= 5));
        }
    }
}
