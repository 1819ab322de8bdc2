// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glyph substitution tables.
//!
//! Each mapped language gets a 26-entry table indexed by letter position
//! (`a` = 0 … `z` = 25). The scripts were picked for visual flavor:
//! Greek for the flowing Elvish hand, runic futhark for Dwarvish, Gothic
//! for Infernal, Glagolitic for Celestial, Old Italic for Giant.
//! Draconic deliberately has no positional table — dragon script is an
//! unordered pool of cuneiform strokes sampled at random.

use crate::types::Language;

const ELVISH_GLYPHS: [&str; 26] = [
    "α", "β", "ς", "δ", "ε", "φ", "γ", "η", "ι", "ϳ", "κ", "λ", "μ", "ν", "ο", "π", "ϙ", "ρ",
    "σ", "τ", "υ", "ϑ", "ω", "ξ", "ψ", "ζ",
];

const DWARVISH_GLYPHS: [&str; 26] = [
    "ᚨ", "ᛒ", "ᚲ", "ᛞ", "ᛖ", "ᚠ", "ᚷ", "ᚺ", "ᛁ", "ᛃ", "ᛣ", "ᛚ", "ᛗ", "ᚾ", "ᛟ", "ᛈ", "ᛢ", "ᚱ",
    "ᛊ", "ᛏ", "ᚢ", "ᚡ", "ᚹ", "ᛪ", "ᚤ", "ᛉ",
];

const INFERNAL_GLYPHS: [&str; 26] = [
    "𐌰", "𐌱", "𐌲", "𐌳", "𐌴", "𐌵", "𐌶", "𐌷", "𐌸", "𐌹", "𐌺", "𐌻", "𐌼", "𐌽", "𐌾", "𐌿", "𐍀", "𐍁",
    "𐍂", "𐍃", "𐍄", "𐍅", "𐍆", "𐍇", "𐍈", "𐍉",
];

const CELESTIAL_GLYPHS: [&str; 26] = [
    "Ⰰ", "Ⰱ", "Ⰲ", "Ⰳ", "Ⰴ", "Ⰵ", "Ⰶ", "Ⰷ", "Ⰸ", "Ⰹ", "Ⰺ", "Ⰻ", "Ⰼ", "Ⰽ", "Ⰾ", "Ⰿ", "Ⱀ", "Ⱁ",
    "Ⱂ", "Ⱃ", "Ⱄ", "Ⱅ", "Ⱆ", "Ⱇ", "Ⱈ", "Ⱉ",
];

const GIANT_GLYPHS: [&str; 26] = [
    "𐌀", "𐌁", "𐌂", "𐌃", "𐌄", "𐌅", "𐌆", "𐌇", "𐌈", "𐌉", "𐌊", "𐌋", "𐌌", "𐌍", "𐌎", "𐌏", "𐌐", "𐌑",
    "𐌒", "𐌓", "𐌔", "𐌕", "𐌖", "𐌗", "𐌘", "𐌙",
];

/// Unordered stroke pool for dragon script. No positional correspondence
/// to source letters.
const DRACONIC_POOL: [&str; 12] = [
    "𐎀", "𐎁", "𐎂", "𐎃", "𐎄", "𐎅", "𐎆", "𐎇", "𐎈", "𐎉", "𐎊", "𐎋",
];

/// Every Draconic word ends with this word-divider stroke.
pub const DRACONIC_TERMINAL: &str = "𐎟";

/// Small punctuation set the scrambler may append to a piece.
pub const PIECE_DIACRITICS: [&str; 4] = ["'", "ʼ", "˘", "~"];

/// The letter → glyph table for a mapped language, `None` for Draconic.
pub fn glyph_table(language: Language) -> Option<&'static [&'static str; 26]> {
    match language {
        Language::Elvish => Some(&ELVISH_GLYPHS),
        Language::Dwarvish => Some(&DWARVISH_GLYPHS),
        Language::Infernal => Some(&INFERNAL_GLYPHS),
        Language::Celestial => Some(&CELESTIAL_GLYPHS),
        Language::Giant => Some(&GIANT_GLYPHS),
        Language::Draconic => None,
    }
}

pub fn draconic_pool() -> &'static [&'static str] {
    &DRACONIC_POOL
}
