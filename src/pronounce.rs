// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pronunciation generator.
//!
//! Produces a hyphen-joined pseudo-phonetic reading of translated text,
//! one line of syllables per translated sentence. Each line seeds its own
//! LCG via FNV-1a over the line's characters, so pronunciation is
//! deterministic in `(translated text, language)` for every language —
//! including Draconic, whose *translation* is not reproducible but whose
//! pronunciation is self-consistent once a translated string exists.

use crate::lexicon::syllable_pool;
use crate::rng::{fnv1a_32, RandomSource, SeededRng};
use crate::types::Language;

/// Syllable count bounds per line.
const MIN_SYLLABLES: usize = 4;
const MAX_SYLLABLES: usize = 14;

/// Trailing glides occasionally appended to a syllable for texture.
const GLIDES: [&str; 3] = ["ai", "ei", "iu"];

/// Pronounce translated text in the given language.
///
/// Empty or whitespace-only input yields an empty string.
pub fn pronounce(translated: &str, language: Language) -> String {
    if translated.trim().is_empty() {
        return String::new();
    }

    let lines: Vec<String> = translated
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| pronounce_line(line, language))
        .collect();

    lines.join("\n")
}

fn pronounce_line(line: &str, language: Language) -> String {
    let mut rng = SeededRng::new(fnv1a_32(line));
    let pool = syllable_pool(language);

    // Roughly one syllable per three letters/digits, nudged by the seeded
    // jitter, always kept inside the [4, 14] band.
    let sounded = line.chars().filter(|c| c.is_alphanumeric()).count();
    let jitter = rng.next_below(3) as i64 - 1;
    let count = ((sounded / 3) as i64 + jitter).clamp(MIN_SYLLABLES as i64, MAX_SYLLABLES as i64)
        as usize;

    let mut syllables = Vec::with_capacity(count);
    for _ in 0..count {
        let mut syllable = pool[rng.next_below(pool.len())].to_string();
        if rng.chance(0.15) {
            syllable.push_str(GLIDES[rng.next_below(GLIDES.len())]);
        }
        if rng.chance(0.1) {
            syllable = syllable.to_uppercase();
        }
        syllables.push(syllable);
    }

    syllables.join("-")
}

/// Pronounce by language name, with identity fallback for unknown names.
pub fn pronounce_named(translated: &str, language_name: &str) -> String {
    match Language::from_name(language_name) {
        Some(language) => pronounce(translated, language),
        None => translated.to_string(),
    }
}
