// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chat boundary records.
//!
//! The transform is consumed by the chat feature: a UI submission becomes
//! a [`ChatMessage`] appended to the campaign's chat history and broadcast
//! to other session participants. The record shape mirrors the
//! `npcchatter:message` event payload plus the backend's message rows.
//!
//! Id generation is an explicit context object rather than a module-level
//! counter, so concurrent call sites each own their sequence.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::translate::transform_named;
use crate::types::Language;

/// Millisecond-timestamp + wrapping-counter id source.
///
/// Ids stay unique and roughly sortable within one source; distinct
/// sources may collide only within the same millisecond, which the chat
/// history tolerates (ids are display handles, not storage keys).
#[derive(Debug, Default)]
pub struct MessageIdSource {
    counter: u32,
}

impl MessageIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.counter = (self.counter + 1) % 10_000;
        format!("{}-{}", Utc::now().timestamp_millis(), self.counter)
    }
}

/// One chat message carrying a translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub original: String,
    pub translated: String,
    pub lang: String,
    pub pronunciation: String,
    /// RFC 3339 UTC.
    pub timestamp: String,
}

impl ChatMessage {
    /// Run the transform pipeline over a submission and stamp the record.
    pub fn compose(
        author: &str,
        text: &str,
        language_name: &str,
        ids: &mut MessageIdSource,
    ) -> ChatMessage {
        let result = transform_named(text, language_name);
        ChatMessage {
            id: ids.next_id(),
            author: author.to_string(),
            kind: "msg".to_string(),
            original: result.original,
            translated: result.translated,
            lang: result.language,
            pronunciation: result.pronunciation,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// The text a given viewer sees.
    ///
    /// Everyone sees the translated form; the original is revealed only to
    /// viewers whose character sheet declares comprehension of the
    /// message's language. Unknown language names show the translated form,
    /// which for them is the original anyway (identity fallback).
    pub fn visible_text(&self, known_languages: &[Language]) -> &str {
        match Language::from_name(&self.lang) {
            Some(lang) if known_languages.contains(&lang) => &self.original,
            _ => &self.translated,
        }
    }
}
