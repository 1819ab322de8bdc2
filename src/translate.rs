// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sentence/text orchestration over the word-level transforms.
//!
//! Splits input on sentence-terminal punctuation followed by whitespace,
//! translates word by word within each sentence, and rejoins sentences
//! with newlines so downstream consumers (the pronunciation generator,
//! the chat panel) can treat one line as one sentence.

use std::sync::OnceLock;

use regex::Regex;

use crate::pronounce::pronounce_named;
use crate::rng::EntropyRng;
use crate::scramble::{render_draconic_word, scramble_word_seeded};
use crate::types::{Language, TranslationRequest, TranslationResult};

/// Sentence boundary: a run of `.`/`!`/`?`, optionally trailed by closing
/// quotes or brackets, followed by whitespace. The regex crate has no
/// lookbehind, so boundaries are located with `find_iter` and the text is
/// sliced at match ends, keeping the terminator with its sentence.
fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[.!?]+["')\]]*\s+"#).expect("sentence boundary regex"))
}

/// Translate a full text into the given language.
///
/// Empty or whitespace-only input yields an empty string. Deterministic
/// for every language except Draconic.
pub fn translate(text: &str, language: Language) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    // One entropy source per call, shared by every Draconic word; unused
    // for the seeded languages.
    let mut entropy = EntropyRng::new();

    let mut sentences: Vec<&str> = Vec::new();
    let mut last = 0;
    for boundary in sentence_boundary().find_iter(text) {
        sentences.push(&text[last..boundary.end()]);
        last = boundary.end();
    }
    if last < text.len() {
        sentences.push(&text[last..]);
    }

    let translated: Vec<String> = sentences
        .iter()
        .map(|sentence| translate_sentence(sentence, language, &mut entropy))
        .filter(|line| !line.is_empty())
        .collect();

    translated.join("\n")
}

fn translate_sentence(sentence: &str, language: Language, entropy: &mut EntropyRng) -> String {
    let words: Vec<String> = sentence
        .split_whitespace()
        .map(|word| match language {
            Language::Draconic => render_draconic_word(word, entropy),
            _ => scramble_word_seeded(word, language),
        })
        .collect();
    words.join(" ")
}

/// Translate by language name, with identity fallback.
///
/// Unknown or unsupported names return the input unchanged — a
/// configuration mistake in the picker must never crash or garble a chat
/// message.
pub fn translate_named(text: &str, language_name: &str) -> String {
    match Language::from_name(language_name) {
        Some(language) => translate(text, language),
        None => text.to_string(),
    }
}

/// Run the full pipeline once: translation plus pronunciation.
///
/// This is the boundary operation behind a chat submission; the result
/// carries everything the message record needs.
pub fn transform_named(text: &str, language_name: &str) -> TranslationResult {
    let translated = translate_named(text, language_name);
    let pronunciation = pronounce_named(&translated, language_name);
    TranslationResult {
        original: text.to_string(),
        translated,
        language: language_name.to_string(),
        pronunciation,
    }
}

/// Handle a chat submission event.
pub fn handle_request(request: &TranslationRequest) -> TranslationResult {
    transform_named(&request.source_text, &request.language)
}
