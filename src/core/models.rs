//! Core data models for translation and speech synthesis

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::language::Language;
use crate::engines::Engine;

/// One part-of-speech group of single-word translations
///
/// Entries are append-only: parsers add words while a response is decoded and
/// the list is never reordered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Part-of-speech tag as reported by the engine
    pub part_of_speech: String,
    /// Ordered word rows for this part of speech
    pub words: Vec<DictionaryWord>,
}

/// A single word row inside a [`DictionaryEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryWord {
    /// The translated word itself
    pub word: String,
    /// Grammatical gender tag, empty when the engine reports none
    pub gender: String,
    /// Synonym translations for this word
    pub translations: Vec<String>,
}

impl DictionaryEntry {
    /// Create an empty entry for a part of speech
    pub fn new(part_of_speech: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            words: Vec::new(),
        }
    }

    /// Append one word row
    pub fn append_word(&mut self, word: String, gender: String, translations: Vec<String>) {
        self.words.push(DictionaryWord {
            word,
            gender,
            translations,
        });
    }
}

/// A dictionary definition of the source word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Part-of-speech tag as reported by the engine
    pub part_of_speech: String,
    /// Definition text
    pub description: String,
    /// Usage example, empty when the engine reports none
    pub example: String,
}

/// Accumulated output of one translate call
///
/// Built chunk by chunk by the orchestrator, returned by value once every
/// pass has completed. A failed call returns an error instead of a partial
/// result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Original input text
    pub source: String,
    /// Source language, resolved by detection when the request used `Auto`
    pub source_lang: Language,
    /// Target language of the translation
    pub translation_lang: Language,
    /// Assembled translation text
    pub translation: String,
    /// Transliteration of the source text, empty when unavailable
    pub source_translit: String,
    /// Transliteration of the translation, empty when unavailable
    pub translation_translit: String,
    /// Part-of-speech grouped single-word translations
    pub dictionary: Vec<DictionaryEntry>,
    /// Definitions of the source word
    pub definitions: Vec<Definition>,
}

impl TranslationResult {
    /// Empty result for a fresh call
    pub(crate) fn new(source: &str, source_lang: Language, translation_lang: Language) -> Self {
        Self {
            source: source.to_string(),
            source_lang,
            translation_lang,
            translation: String::new(),
            source_translit: String::new(),
            translation_translit: String::new(),
            dictionary: Vec::new(),
            definitions: Vec::new(),
        }
    }
}

/// Ordered playback sequence for one speech synthesis call
///
/// One audio-fetch URL per chunk; played in order the URLs cover the full
/// input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Engine the URLs belong to
    pub engine: Engine,
    /// Language the text is spoken in
    pub language: Language,
    /// Per-chunk audio URLs, in input order
    pub urls: Vec<Url>,
}

/// Voice to use for speech synthesis
///
/// Named voices belong to Yandex, `Male`/`Female` to Bing. `Default` maps to
/// an engine-specific fallback and is accepted by every engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Voice {
    Default,
    // Yandex
    Zahar,
    Ermil,
    Jane,
    Oksana,
    Alyss,
    Omazh,
    // Bing
    Male,
    Female,
}

/// Emotion to use for speech synthesis (Yandex only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Emotion {
    Default,
    Neutral,
    Good,
    Evil,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_entry_append_order() {
        let mut entry = DictionaryEntry::new("noun");
        entry.append_word("Haus".into(), "das".into(), vec!["house".into()]);
        entry.append_word("Heim".into(), "das".into(), vec!["home".into()]);

        assert_eq!(entry.part_of_speech, "noun");
        assert_eq!(entry.words[0].word, "Haus");
        assert_eq!(entry.words[1].word, "Heim");
    }

    #[test]
    fn test_new_result_is_empty() {
        let result = TranslationResult::new("hello", Language::Auto, Language::German);
        assert_eq!(result.source, "hello");
        assert!(result.translation.is_empty());
        assert!(result.dictionary.is_empty());
        assert!(result.definitions.is_empty());
    }
}
