// SPDX-License-Identifier: PMPL-1.0-or-later

//! NPC-Tongues — fantasy-language translation for tabletop chat.
//!
//! This crate is the transform core behind the NPC Chatter translator:
//! it turns player text into stylized fantasy-language glyphs plus a
//! pseudo-phonetic pronunciation, reproducibly enough to be broadcast and
//! re-rendered anywhere.
//!
//! ENGINE PILLARS:
//! 1. **Lexicon**: per-language glyph maps and syllable pools embedded as
//!    compile-time tables.
//! 2. **Scrambler**: content-seeded re-clustering of each word's mapped
//!    glyphs — identical `(word, language)` input always produces the
//!    identical rendering.
//! 3. **Pronunciation**: seeded syllable sampling over the translated
//!    text, one hyphenated line per sentence.
//!
//! Draconic is the deliberate outlier: its dragon-script rendering draws
//! OS entropy per call and is not reproducible. See
//! [`types::Language::is_deterministic`].
//!
//! Unknown language names never error; the transform degrades to identity
//! output (see [`translate::translate_named`]).

pub mod lexicon;
pub mod message;
pub mod pronounce;
pub mod rng;
pub mod scramble;
pub mod translate;
pub mod types;
