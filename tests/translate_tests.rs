// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the translation pipeline.

use npc_tongues::lexicon::DRACONIC_TERMINAL;
use npc_tongues::translate::{transform_named, translate, translate_named};
use npc_tongues::types::Language;

fn mapped_languages() -> impl Iterator<Item = Language> {
    Language::all().iter().copied().filter(Language::is_deterministic)
}

#[test]
fn test_determinism_across_repeated_calls() {
    let text = "The ancient vault lies beneath the mountain. Beware its guardian!";
    for lang in mapped_languages() {
        let runs: Vec<String> = (0..5).map(|_| translate(text, lang)).collect();
        assert!(
            runs.windows(2).all(|w| w[0] == w[1]),
            "{lang} translation drifted between calls"
        );
    }
}

#[test]
fn test_concrete_dwarvish_scenario() {
    // Seed depends only on ("cat", "Dwarvish"); two independent
    // invocations must reproduce the identical clustered glyph string.
    let first = translate("cat", Language::Dwarvish);
    let second = translate("cat", Language::Dwarvish);
    assert_eq!(first, second);
    assert_ne!(first, "cat", "cat should not survive untranslated");
}

#[test]
fn test_empty_input_identity() {
    for lang in Language::all() {
        assert_eq!(translate("", *lang), "", "{lang}");
        assert_eq!(translate(" \t\n", *lang), "", "{lang}");
    }
}

#[test]
fn test_digits_and_spacing_preserved() {
    let out = translate("a1 b2", Language::Dwarvish);
    assert!(out.contains('1'), "digit 1 substituted in {out:?}");
    assert!(out.contains('2'), "digit 2 substituted in {out:?}");
    assert_eq!(out.split(' ').count(), 2, "word structure lost in {out:?}");
}

#[test]
fn test_sentence_preservation() {
    for lang in mapped_languages() {
        let out = translate("Hello world. Goodbye friend!", lang);
        assert_eq!(
            out.lines().count(),
            2,
            "{lang} should produce exactly two newline-separated segments, got {out:?}"
        );
    }
}

#[test]
fn test_multiple_terminators_stay_one_boundary() {
    // "?!" and "..." each count as one boundary, giving three segments.
    let out = translate("Really?! Yes... absolutely.", Language::Celestial);
    assert_eq!(out.lines().count(), 3, "got {out:?}");
}

#[test]
fn test_unknown_language_fallback() {
    assert_eq!(translate_named("hello", "Klingon"), "hello");
    assert_eq!(translate_named("hello", "common"), "hello");
    assert_eq!(translate_named("", "Klingon"), "");
}

#[test]
fn test_translated_text_uses_foreign_glyphs() {
    for lang in mapped_languages() {
        let out = translate("stormwind keep", lang);
        assert!(
            !out.chars().any(|c| c.is_ascii_lowercase()),
            "{lang} left ASCII letters in {out:?}"
        );
    }
}

#[test]
fn test_draconic_structural_shape_only() {
    // Draconic is permitted (not required) to differ between calls, so no
    // equality assertion here — only shape.
    let out = translate("cat", Language::Draconic);
    assert!(out.ends_with(DRACONIC_TERMINAL), "missing terminal stroke: {out:?}");
    let strokes = out.chars().count();
    assert!(
        (3..=6).contains(&strokes),
        "stroke count not proportional to input: {out:?}"
    );
}

#[test]
fn test_draconic_per_word_termination() {
    let out = translate("red wyrm", Language::Draconic);
    let words: Vec<&str> = out.split(' ').collect();
    assert_eq!(words.len(), 2);
    for word in words {
        assert!(word.ends_with(DRACONIC_TERMINAL), "word missing terminal: {word:?}");
    }
}

#[test]
fn test_transform_pipeline_consistency() {
    let a = transform_named("speak friend and enter", "Elvish");
    let b = transform_named("speak friend and enter", "Elvish");
    assert_eq!(a.translated, b.translated);
    assert_eq!(a.pronunciation, b.pronunciation);
    assert_eq!(a.original, "speak friend and enter");
}
