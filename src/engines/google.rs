//! Google translation backend
//!
//! The unofficial `translate_a/single` endpoint answers with a loosely typed
//! positional array. Every positional slot is named once in [`slots`] and the
//! parser fails fast with a parsing error when a required slot is missing, so
//! upstream schema drift surfaces in exactly one place.

use serde_json::Value;
use url::Url;

use crate::core::errors::{Result, TranslationError};
use crate::core::language::Language;
use crate::core::models::{Definition, DictionaryEntry, Emotion, Voice};

/// Characters per translation request
pub const TRANSLATE_LIMIT: usize = 5000;
/// Characters per TTS request
pub const TTS_LIMIT: usize = 200;

/// Languages present in the catalog but absent from this engine
const UNSUPPORTED: &[Language] = &[
    Language::Bashkir,
    Language::HillMari,
    Language::Mari,
    Language::Papiamento,
    Language::Tatar,
    Language::Udmurt,
];

/// Codes the engine may emit that do not map back to a catalog language
const UNSUPPORTED_CODES: &[&str] = &["ba", "mrj", "mhr", "ny", "tt", "udm"];

/// Positional slots of the `translate_a/single` response array
mod slots {
    /// `[0]`: list of sentence fragments
    pub const SENTENCES: usize = 0;
    /// `[1]`: dictionary entries (single-word queries)
    pub const DICTIONARY: usize = 1;
    /// `[2]`: detected source language code
    pub const SOURCE_LANGUAGE: usize = 2;
    /// `[12]`: definitions (single-word queries)
    pub const DEFINITIONS: usize = 12;
    /// `[i][0]` inside the sentence list: fragment text
    pub const FRAGMENT_TEXT: usize = 0;
    /// Last sentence element, `[2]`: translation transliteration
    pub const TRANSLATION_TRANSLIT: usize = 2;
    /// Last sentence element, `[3]`: source transliteration
    pub const SOURCE_TRANSLIT: usize = 3;
}

/// Translation code for a language, `None` when unsupported
pub fn translation_code(language: Language) -> Option<&'static str> {
    if UNSUPPORTED.contains(&language) {
        return None;
    }
    Some(language.code())
}

/// Decode a code reported by the engine
pub fn language_from_code(code: &str) -> Option<Language> {
    if UNSUPPORTED_CODES.contains(&code) {
        return None;
    }
    Language::from_code(code)
}

/// TTS uses the translation codes, except that `Auto` cannot be spoken
pub fn tts_code(language: Language) -> Option<&'static str> {
    if language == Language::Auto {
        return None;
    }
    translation_code(language)
}

/// The engine exposes a single default voice
pub fn voice_code(voice: Voice) -> Option<&'static str> {
    match voice {
        Voice::Default => Some("default"),
        _ => None,
    }
}

/// The engine exposes a single default emotion
pub fn emotion_code(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Default => Some("default"),
        _ => None,
    }
}

/// Decoded fields of one translation chunk response
#[derive(Debug, Default)]
pub struct ParsedChunk {
    pub translation: String,
    pub translation_translit: String,
    pub source_translit: String,
    pub detected_source: Option<String>,
    pub dictionary: Vec<DictionaryEntry>,
    pub definitions: Vec<Definition>,
}

/// Decode one `translate_a/single` response body
///
/// `with_enrichment` controls whether dictionary entries and definitions are
/// parsed; it is set only when the entire original input fits into a single
/// chunk, multi-chunk inputs skip enrichment entirely.
pub fn parse_translate_response(body: &[u8], with_enrichment: bool) -> Result<ParsedChunk> {
    // A throttling notice comes back as an HTML page instead of JSON
    if body.first() == Some(&b'<') {
        return Err(TranslationError::service(
            "backend detected unusual traffic and answered with an HTML notice",
        ));
    }

    let root: Value = serde_json::from_slice(body)
        .map_err(|e| TranslationError::parsing(format!("response is not valid JSON: {}", e)))?;

    let sentences = root
        .get(slots::SENTENCES)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::parsing("missing sentence list"))?;

    // First fragment is mandatory; if the upstream split the translation into
    // several sentences, each non-final fragment ends in whitespace
    let mut translation = fragment_text(sentences, 0)
        .ok_or_else(|| TranslationError::parsing("missing first sentence fragment"))?
        .to_string();
    let mut index = 1;
    while ends_in_separator(&translation) {
        match fragment_text(sentences, index) {
            Some(fragment) => translation.push_str(fragment),
            None => break,
        }
        index += 1;
    }

    // Transliterations ride on the last sentence element and are optional
    let last = sentences.last();
    let translation_translit = translit_at(last, slots::TRANSLATION_TRANSLIT);
    let source_translit = translit_at(last, slots::SOURCE_TRANSLIT);

    let detected_source = root
        .get(slots::SOURCE_LANGUAGE)
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut parsed = ParsedChunk {
        translation,
        translation_translit,
        source_translit,
        detected_source,
        ..Default::default()
    };

    if with_enrichment {
        parsed.dictionary = parse_dictionary(&root);
        parsed.definitions = parse_definitions(&root);
    }

    Ok(parsed)
}

/// Decode the detected language from a lightweight `dt=t` detection response
pub fn parse_detect_response(body: &[u8]) -> Result<String> {
    if body.first() == Some(&b'<') {
        return Err(TranslationError::service(
            "backend detected unusual traffic and answered with an HTML notice",
        ));
    }

    let root: Value = serde_json::from_slice(body)
        .map_err(|e| TranslationError::parsing(format!("response is not valid JSON: {}", e)))?;

    root.get(slots::SOURCE_LANGUAGE)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TranslationError::parsing("unable to parse language from response"))
}

/// TTS audio URL for one chunk
pub fn tts_url(endpoint: &str, language_code: &str, chunk: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| TranslationError::parameters(format!("invalid TTS endpoint: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("ie", "UTF-8")
        .append_pair("client", "gtx")
        .append_pair("tl", language_code)
        .append_pair("q", chunk);
    Ok(url)
}

fn ends_in_separator(text: &str) -> bool {
    text.ends_with(' ') || text.ends_with('\n') || text.ends_with('\u{00a0}')
}

fn fragment_text(sentences: &[Value], index: usize) -> Option<&str> {
    sentences
        .get(index)?
        .get(slots::FRAGMENT_TEXT)?
        .as_str()
}

fn translit_at(last_sentence: Option<&Value>, index: usize) -> String {
    last_sentence
        .and_then(|v| v.get(index))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Dictionary entries at `[1]`: `[pos, _, words]` with word rows
/// `[word, translations, _, _, gender]`
fn parse_dictionary(root: &Value) -> Vec<DictionaryEntry> {
    let mut entries = Vec::new();
    let Some(groups) = root.get(slots::DICTIONARY).and_then(Value::as_array) else {
        return entries;
    };

    for group in groups {
        let part_of_speech = group
            .get(0)
            .and_then(Value::as_str)
            .unwrap_or_default();
        let mut entry = DictionaryEntry::new(part_of_speech);

        let words = group.get(2).and_then(Value::as_array);
        for row in words.into_iter().flatten() {
            let word = row
                .get(0)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let gender = row
                .get(4)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let translations = row
                .get(1)
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            entry.append_word(word, gender, translations);
        }

        entries.push(entry);
    }

    entries
}

/// Definitions at `[12]`: `[pos, [[description, _, example], ...]]`
fn parse_definitions(root: &Value) -> Vec<Definition> {
    let mut definitions = Vec::new();
    let Some(groups) = root.get(slots::DEFINITIONS).and_then(Value::as_array) else {
        return definitions;
    };

    for group in groups {
        let part_of_speech = group
            .get(0)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let body = group.get(1).and_then(|v| v.get(0));
        let description = body
            .and_then(|v| v.get(0))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let example = body
            .and_then(|v| v.get(2))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        definitions.push(Definition {
            part_of_speech,
            description,
            example,
        });
    }

    definitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_languages_have_no_code() {
        assert_eq!(translation_code(Language::Bashkir), None);
        assert_eq!(translation_code(Language::Tatar), None);
        assert_eq!(translation_code(Language::Udmurt), None);
        assert_eq!(translation_code(Language::German), Some("de"));
        assert_eq!(translation_code(Language::Auto), Some("auto"));
    }

    #[test]
    fn test_unsupported_codes_decode_to_none() {
        for code in ["ba", "mrj", "mhr", "ny", "tt", "udm"] {
            assert_eq!(language_from_code(code), None, "code {}", code);
        }
        assert_eq!(language_from_code("ru"), Some(Language::Russian));
    }

    #[test]
    fn test_tts_rejects_auto() {
        assert_eq!(tts_code(Language::Auto), None);
        assert_eq!(tts_code(Language::English), Some("en"));
    }

    #[test]
    fn test_parse_single_sentence() {
        let body = br#"[[["Hallo Welt","hello world",null,null,1]],null,"en"]"#;
        let parsed = parse_translate_response(body, false).unwrap();
        assert_eq!(parsed.translation, "Hallo Welt");
        assert_eq!(parsed.detected_source.as_deref(), Some("en"));
        assert!(parsed.dictionary.is_empty());
    }

    #[test]
    fn test_parse_joins_trailing_whitespace_fragments() {
        // Non-final fragments end in a space; parsing stitches them together
        let body = br#"[[["Erster Satz. ","first.",null,null,1],["Zweiter Satz.","second.",null,null,1],[null,null,"translit","sourcetranslit"]],null,"en"]"#;
        let parsed = parse_translate_response(body, false).unwrap();
        assert_eq!(parsed.translation, "Erster Satz. Zweiter Satz.");
        assert_eq!(parsed.translation_translit, "translit");
        assert_eq!(parsed.source_translit, "sourcetranslit");
    }

    #[test]
    fn test_parse_dictionary_and_definitions() {
        let body = br#"[
            [["Haus","house",null,null,1]],
            [["noun",["Haus","Heim"],[["Haus",["house","home"],null,0.5,"das"]]]],
            "en",
            null,null,null,null,null,null,null,null,null,
            [["noun",[["a building for living in",null,"she lives in a small house"]]]]
        ]"#;
        let parsed = parse_translate_response(body, true).unwrap();
        assert_eq!(parsed.dictionary.len(), 1);
        assert_eq!(parsed.dictionary[0].part_of_speech, "noun");
        assert_eq!(parsed.dictionary[0].words[0].word, "Haus");
        assert_eq!(parsed.dictionary[0].words[0].gender, "das");
        assert_eq!(
            parsed.dictionary[0].words[0].translations,
            vec!["house", "home"]
        );
        assert_eq!(parsed.definitions.len(), 1);
        assert_eq!(parsed.definitions[0].description, "a building for living in");
        assert_eq!(parsed.definitions[0].example, "she lives in a small house");
    }

    #[test]
    fn test_enrichment_is_skipped_when_disabled() {
        let body = br#"[
            [["Haus","house",null,null,1]],
            [["noun",["Haus"],[["Haus",["house"],null,0.5,"das"]]]],
            "en"
        ]"#;
        let parsed = parse_translate_response(body, false).unwrap();
        assert!(parsed.dictionary.is_empty());
        assert!(parsed.definitions.is_empty());
    }

    #[test]
    fn test_html_notice_is_a_service_error() {
        let body = b"<html><body>unusual traffic</body></html>";
        let err = parse_translate_response(body, false).unwrap_err();
        assert!(matches!(err, TranslationError::Service { .. }));
    }

    #[test]
    fn test_missing_sentence_is_a_parsing_error() {
        let body = br#"[[],null,"en"]"#;
        let err = parse_translate_response(body, false).unwrap_err();
        assert!(matches!(err, TranslationError::Parsing { .. }));

        let body = br#"{"unexpected":"shape"}"#;
        let err = parse_translate_response(body, false).unwrap_err();
        assert!(matches!(err, TranslationError::Parsing { .. }));
    }

    #[test]
    fn test_parse_detect_response() {
        let body = r#"[[["Hello","привет",null,null,1]],null,"ru"]"#.as_bytes();
        assert_eq!(parse_detect_response(body).unwrap(), "ru");
    }

    #[test]
    fn test_tts_url_shape() {
        let url = tts_url(
            "http://translate.googleapis.com/translate_tts",
            "de",
            "Hallo Welt",
        )
        .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("client=gtx"));
        assert!(query.contains("tl=de"));
        assert!(query.contains("q=Hallo+Welt"));
    }
}
