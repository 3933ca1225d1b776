//! Engine catalog and per-engine protocol adapters
//!
//! Each backend gets its own module owning the engine's code tables, request
//! shapes and response parsers. [`Engine`] is the uniform capability surface
//! the orchestrator works against: character limits, language code
//! encode/decode and TTS voice/emotion tables, each answering
//! code-or-unsupported.

pub mod bing;
pub mod google;
pub mod yandex;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::language::Language;
use crate::core::models::{Emotion, Voice};

/// Supported translation backends
///
/// Google and Yandex support translation; Bing is TTS-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Engine {
    Google,
    Yandex,
    Bing,
}

impl Engine {
    /// Whether the engine implements the translation API
    pub fn supports_translation(self) -> bool {
        !matches!(self, Engine::Bing)
    }

    /// Characters per translation request
    ///
    /// Protocol constants, not configurable. Bing has no translation API and
    /// returns 0.
    pub fn translate_limit(self) -> usize {
        match self {
            Engine::Google => google::TRANSLATE_LIMIT,
            Engine::Yandex => yandex::TRANSLATE_LIMIT,
            Engine::Bing => 0,
        }
    }

    /// Characters per TTS request
    pub fn tts_limit(self) -> usize {
        match self {
            Engine::Google => google::TTS_LIMIT,
            Engine::Yandex => yandex::TTS_LIMIT,
            Engine::Bing => bing::TTS_LIMIT,
        }
    }

    /// Engine-specific translation code for a language
    ///
    /// `None` means the engine cannot translate this language.
    pub fn translation_code(self, language: Language) -> Option<&'static str> {
        match self {
            Engine::Google => google::translation_code(language),
            Engine::Yandex => yandex::translation_code(language),
            Engine::Bing => None,
        }
    }

    /// Decode an engine-reported language code
    pub fn language_from_code(self, code: &str) -> Option<Language> {
        match self {
            Engine::Google => google::language_from_code(code),
            Engine::Yandex => yandex::language_from_code(code),
            Engine::Bing => None,
        }
    }

    /// Engine-specific TTS language code
    ///
    /// TTS code sets are narrower than translation code sets.
    pub fn tts_code(self, language: Language) -> Option<&'static str> {
        match self {
            Engine::Google => google::tts_code(language),
            Engine::Yandex => yandex::tts_code(language),
            Engine::Bing => bing::tts_code(language),
        }
    }

    /// Engine-specific voice code
    pub fn voice_code(self, voice: Voice) -> Option<&'static str> {
        match self {
            Engine::Google => google::voice_code(voice),
            Engine::Yandex => yandex::voice_code(voice),
            Engine::Bing => bing::voice_code(voice),
        }
    }

    /// Engine-specific emotion code
    pub fn emotion_code(self, emotion: Emotion) -> Option<&'static str> {
        match self {
            Engine::Google => google::emotion_code(emotion),
            Engine::Yandex => yandex::emotion_code(emotion),
            Engine::Bing => bing::emotion_code(emotion),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Google => write!(f, "Google"),
            Engine::Yandex => write!(f, "Yandex"),
            Engine::Bing => write!(f, "Bing"),
        }
    }
}
