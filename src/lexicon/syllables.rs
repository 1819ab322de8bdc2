// SPDX-License-Identifier: PMPL-1.0-or-later

//! Syllable pools for the pronunciation generator.
//!
//! Short phonetic fragments, 10–15 per language. The pronunciation stage
//! samples these by seeded index, so pool order is part of the observable
//! output contract: append new syllables at the end, never reorder.

use crate::types::Language;

const ELVISH_SYLLABLES: [&str; 12] = [
    "ae", "la", "thil", "rie", "syl", "nor", "ith", "el", "va", "mir", "lor", "ien",
];

const DWARVISH_SYLLABLES: [&str; 12] = [
    "khaz", "dum", "bar", "grim", "thur", "mok", "dar", "un", "gol", "rik", "bad", "kar",
];

const DRACONIC_SYLLABLES: [&str; 11] = [
    "rax", "thur", "ixen", "kor", "vhy", "dra", "gix", "nar", "oth", "zys", "myv",
];

const INFERNAL_SYLLABLES: [&str; 11] = [
    "zek", "mal", "ur", "gash", "vex", "noth", "kra", "bel", "izh", "dor", "xul",
];

const CELESTIAL_SYLLABLES: [&str; 11] = [
    "ael", "ser", "aph", "iel", "on", "rah", "lum", "eth", "ora", "vel", "ina",
];

const GIANT_SYLLABLES: [&str; 10] = [
    "thrum", "gor", "brak", "ud", "mog", "han", "grul", "ver", "stom", "kad",
];

/// The fixed syllable pool for a language.
///
/// Every language has one, including Draconic: pronunciation is seeded
/// from its own input text, so it stays deterministic even downstream of
/// the non-deterministic dragon-script rendering.
pub fn syllable_pool(language: Language) -> &'static [&'static str] {
    match language {
        Language::Elvish => &ELVISH_SYLLABLES,
        Language::Dwarvish => &DWARVISH_SYLLABLES,
        Language::Draconic => &DRACONIC_SYLLABLES,
        Language::Infernal => &INFERNAL_SYLLABLES,
        Language::Celestial => &CELESTIAL_SYLLABLES,
        Language::Giant => &GIANT_SYLLABLES,
    }
}
