//! Yandex translation backend
//!
//! Translation answers are flat JSON objects; transliteration is a separate
//! endpoint that returns a bare quoted string, and dictionary data comes from
//! yet another service keyed by the `"src-dst"` language pair. API access
//! requires the scraped session ID managed by
//! [`crate::core::session::SessionStore`].

use serde_json::Value;
use url::Url;

use crate::core::errors::{Result, TranslationError};
use crate::core::language::Language;
use crate::core::models::{DictionaryEntry, Emotion, Voice};

/// Characters per translation request
pub const TRANSLATE_LIMIT: usize = 150;
/// Characters per transliteration request
pub const TRANSLIT_LIMIT: usize = 180;
/// Characters per TTS request
pub const TTS_LIMIT: usize = 1400;

/// Translation code for a language
///
/// The engine deviates from the catalog for two languages.
pub fn translation_code(language: Language) -> Option<&'static str> {
    match language {
        Language::SimplifiedChinese => Some("zn"),
        Language::Javanese => Some("jv"),
        _ => Some(language.code()),
    }
}

/// Decode a code reported by the engine, honoring the same overrides
pub fn language_from_code(code: &str) -> Option<Language> {
    match code {
        "zn" => Some(Language::SimplifiedChinese),
        "jv" => Some(Language::Javanese),
        _ => Language::from_code(code),
    }
}

/// TTS supports only three languages, each with a locale-tagged code
pub fn tts_code(language: Language) -> Option<&'static str> {
    match language {
        Language::Russian => Some("ru_RU"),
        Language::Tatar => Some("tr_TR"),
        Language::English => Some("en_GB"),
        _ => None,
    }
}

/// Named voices; `Default` falls back to `zahar`
pub fn voice_code(voice: Voice) -> Option<&'static str> {
    match voice {
        Voice::Default | Voice::Zahar => Some("zahar"),
        Voice::Ermil => Some("ermil"),
        Voice::Jane => Some("jane"),
        Voice::Oksana => Some("oksana"),
        Voice::Alyss => Some("alyss"),
        Voice::Omazh => Some("omazh"),
        Voice::Male | Voice::Female => None,
    }
}

/// Emotions; `Default` falls back to `neutral`
pub fn emotion_code(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Default | Emotion::Neutral => Some("neutral"),
        Emotion::Good => Some("good"),
        Emotion::Evil => Some("evil"),
    }
}

/// Decoded fields of one translation chunk response
#[derive(Debug)]
pub struct ParsedChunk {
    pub translation: String,
    /// Source half of the reported `"src-dst"` pair
    pub detected_source: Option<String>,
}

/// Decode one translate response body
pub fn parse_translate_response(body: &[u8]) -> Result<ParsedChunk> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|e| TranslationError::parsing(format!("response is not valid JSON: {}", e)))?;

    let translation = root
        .get("text")
        .and_then(|v| v.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| TranslationError::parsing("missing translation text"))?
        .to_string();

    let detected_source = root
        .get("lang")
        .and_then(Value::as_str)
        .and_then(|pair| pair.split('-').next())
        .filter(|code| !code.is_empty())
        .map(str::to_string);

    Ok(ParsedChunk {
        translation,
        detected_source,
    })
}

/// Human-readable message from an error body, used for service errors
pub fn parse_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|root| {
            root.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "service rejected the request".to_string())
}

/// Decode a transliteration response
///
/// The endpoint answers with the bare transliterated string wrapped in
/// quotes, not with JSON.
pub fn parse_translit_response(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

/// Decode a dictionary lookup response for the given `"src-dst"` key
pub fn parse_dictionary_response(body: &[u8], dict_key: &str) -> Result<Vec<DictionaryEntry>> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|e| TranslationError::parsing(format!("response is not valid JSON: {}", e)))?;

    let mut entries = Vec::new();
    let Some(regular) = root
        .get(dict_key)
        .and_then(|v| v.get("regular"))
        .and_then(Value::as_array)
    else {
        // No dictionary data for this pair is not an error
        return Ok(entries);
    };

    for group in regular {
        let part_of_speech = group
            .get("pos")
            .and_then(|pos| pos.get("text"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let mut entry = DictionaryEntry::new(part_of_speech);

        let rows = group.get("tr").and_then(Value::as_array);
        for row in rows.into_iter().flatten() {
            let word = row
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let gender = row
                .get("gen")
                .and_then(|gen| gen.get("text"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let translations = row
                .get("mean")
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(|mean| mean.get("text").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            entry.append_word(word, gender, translations);
        }

        entries.push(entry);
    }

    Ok(entries)
}

/// TTS audio URL for one chunk
pub fn tts_url(
    endpoint: &str,
    language_code: &str,
    voice_code: &str,
    emotion_code: &str,
    chunk: &str,
) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| TranslationError::parameters(format!("invalid TTS endpoint: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("text", chunk)
        .append_pair("lang", language_code)
        .append_pair("speaker", voice_code)
        .append_pair("emotion", emotion_code)
        .append_pair("format", "mp3");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_overrides() {
        assert_eq!(translation_code(Language::SimplifiedChinese), Some("zn"));
        assert_eq!(translation_code(Language::Javanese), Some("jv"));
        assert_eq!(translation_code(Language::Russian), Some("ru"));

        assert_eq!(language_from_code("zn"), Some(Language::SimplifiedChinese));
        assert_eq!(language_from_code("jv"), Some(Language::Javanese));
        assert_eq!(language_from_code("ru"), Some(Language::Russian));
    }

    #[test]
    fn test_tts_language_allowlist() {
        assert_eq!(tts_code(Language::Russian), Some("ru_RU"));
        assert_eq!(tts_code(Language::Tatar), Some("tr_TR"));
        assert_eq!(tts_code(Language::English), Some("en_GB"));
        assert_eq!(tts_code(Language::German), None);
        assert_eq!(tts_code(Language::Auto), None);
    }

    #[test]
    fn test_voice_and_emotion_defaults() {
        assert_eq!(voice_code(Voice::Default), Some("zahar"));
        assert_eq!(voice_code(Voice::Omazh), Some("omazh"));
        assert_eq!(voice_code(Voice::Male), None);

        assert_eq!(emotion_code(Emotion::Default), Some("neutral"));
        assert_eq!(emotion_code(Emotion::Evil), Some("evil"));
    }

    #[test]
    fn test_parse_translate_response() {
        let body = br#"{"code":200,"lang":"en-de","text":["Hallo Welt"]}"#;
        let parsed = parse_translate_response(body).unwrap();
        assert_eq!(parsed.translation, "Hallo Welt");
        assert_eq!(parsed.detected_source.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_translate_response_missing_text() {
        let body = br#"{"code":200,"lang":"en-de"}"#;
        let err = parse_translate_response(body).unwrap_err();
        assert!(matches!(err, TranslationError::Parsing { .. }));
    }

    #[test]
    fn test_parse_error_message() {
        let body = br#"{"code":408,"message":"text limit exceeded"}"#;
        assert_eq!(parse_error_message(body), "text limit exceeded");
        assert_eq!(
            parse_error_message(b"not json"),
            "service rejected the request"
        );
    }

    #[test]
    fn test_parse_translit_strips_quotes() {
        assert_eq!(parse_translit_response(b"\"privet\""), "privet");
        assert_eq!(parse_translit_response(b"privet"), "privet");
    }

    #[test]
    fn test_parse_dictionary_response() {
        let body = br#"{
            "en-de": {
                "regular": [{
                    "pos": {"text": "noun"},
                    "tr": [{
                        "text": "Haus",
                        "gen": {"text": "das"},
                        "mean": [{"text": "house"}, {"text": "home"}]
                    }]
                }]
            }
        }"#;
        let entries = parse_dictionary_response(body, "en-de").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].part_of_speech, "noun");
        assert_eq!(entries[0].words[0].word, "Haus");
        assert_eq!(entries[0].words[0].gender, "das");
        assert_eq!(entries[0].words[0].translations, vec!["house", "home"]);
    }

    #[test]
    fn test_parse_dictionary_response_without_data() {
        let entries = parse_dictionary_response(br#"{"head":{}}"#, "en-de").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_tts_url_shape() {
        let url = tts_url(
            "https://tts.voicetech.yandex.net/tts",
            "ru_RU",
            "zahar",
            "neutral",
            "привет",
        )
        .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("lang=ru_RU"));
        assert!(query.contains("speaker=zahar"));
        assert!(query.contains("emotion=neutral"));
        assert!(query.contains("format=mp3"));
    }
}
