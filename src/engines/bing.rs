//! Bing speech backend
//!
//! Bing is TTS-only: it has no translation API here, but speaks a fixed
//! allowlist of languages through the `tspeak` endpoint with locale-tagged
//! codes.

use url::Url;

use crate::core::errors::{Result, TranslationError};
use crate::core::language::Language;
use crate::core::models::{Emotion, Voice};

/// Characters per TTS request
pub const TTS_LIMIT: usize = 2001;

/// Fixed locale-tagged TTS allowlist
const TTS_CODES: &[(Language, &str)] = &[
    (Language::Arabic, "ar-EG"),
    (Language::Catalan, "ca-ES"),
    (Language::Danish, "da-DK"),
    (Language::German, "de-DE"),
    (Language::English, "en-GB"),
    (Language::Spanish, "es-ES"),
    (Language::Finnish, "fi-FI"),
    (Language::French, "fr-FR"),
    (Language::Hindi, "hi-IN"),
    (Language::Italian, "it-IT"),
    (Language::Japanese, "ja-JP"),
    (Language::Korean, "ko-KR"),
    (Language::Norwegian, "nb-NO"),
    (Language::Dutch, "nl-NL"),
    (Language::Polish, "pl-PL"),
    (Language::Portuguese, "pt-PT"),
    (Language::Russian, "ru-RU"),
    (Language::Swedish, "sv-SE"),
    (Language::SimplifiedChinese, "zh-CN"),
    (Language::TraditionalChinese, "zh-HK"),
];

/// TTS code for a language, `None` outside the allowlist
pub fn tts_code(language: Language) -> Option<&'static str> {
    TTS_CODES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, code)| *code)
}

/// Male or female voice; `Default` falls back to `male`
pub fn voice_code(voice: Voice) -> Option<&'static str> {
    match voice {
        Voice::Default | Voice::Male => Some("male"),
        Voice::Female => Some("female"),
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

/// TTS audio URL for one chunk
pub fn tts_url(endpoint: &str, language_code: &str, voice_code: &str, chunk: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| TranslationError::parameters(format!("invalid TTS endpoint: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("language", language_code)
        .append_pair("text", chunk)
        .append_pair("options", voice_code)
        .append_pair("format", "audio/mp3");
    Ok(url)
}
