// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for npc-tongues.
//!
//! The six fantasy languages known to the NPC Chatter chat feature, plus
//! the request/result shapes exchanged with the chat boundary.

use serde::{Deserialize, Serialize};

/// Fantasy languages supported by the translator.
///
/// Five languages carry a glyph map (a total letter → glyph substitution
/// table) and translate deterministically. Draconic is the odd one out:
/// it draws from an unordered glyph pool with true per-call randomness,
/// so its translated form is not reproducible. See
/// [`Language::is_deterministic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Elvish,
    Dwarvish,
    Draconic,
    Infernal,
    Celestial,
    Giant,
}

impl Language {
    /// Display name as shown in the language picker and chat records.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Elvish => "Elvish",
            Language::Dwarvish => "Dwarvish",
            Language::Draconic => "Draconic",
            Language::Infernal => "Infernal",
            Language::Celestial => "Celestial",
            Language::Giant => "Giant",
        }
    }

    /// Parse a language name, case-insensitively.
    ///
    /// Returns `None` for unknown names. Callers translating on behalf of
    /// the chat feature should treat `None` as "pass the text through
    /// unchanged", never as an error — see [`crate::translate::translate_named`].
    pub fn from_name(name: &str) -> Option<Language> {
        match name.to_ascii_lowercase().as_str() {
            "elvish" => Some(Language::Elvish),
            "dwarvish" => Some(Language::Dwarvish),
            "draconic" => Some(Language::Draconic),
            "infernal" => Some(Language::Infernal),
            "celestial" => Some(Language::Celestial),
            "giant" => Some(Language::Giant),
            _ => None,
        }
    }

    /// All supported languages, in picker display order.
    pub fn all() -> &'static [Language] {
        &[
            Language::Elvish,
            Language::Dwarvish,
            Language::Draconic,
            Language::Infernal,
            Language::Celestial,
            Language::Giant,
        ]
    }

    /// Whether translation output is reproducible for identical input.
    ///
    /// True for every language except Draconic, whose dragon-script
    /// rendering intentionally uses OS entropy per call. The asymmetry is
    /// a product decision ("dragon speech is chaotic"), preserved as-is;
    /// tests must not assert equality on Draconic output.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Language::Draconic)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A translation request as submitted from the chat UI.
///
/// `language` is the raw name string from the picker, deliberately not
/// pre-parsed: unknown names flow through to the identity fallback rather
/// than failing validation upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(rename = "sourceText")]
    pub source_text: String,
    pub language: String,
}

/// The outcome of running the full transform pipeline once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub language: String,
    pub pronunciation: String,
}
