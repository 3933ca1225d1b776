//! Online Translator - multi-backend web translation client
//!
//! This library obtains machine translation, transliteration, dictionary
//! data and text-to-speech audio URLs from the unofficial Google, Yandex and
//! Bing web APIs, handling per-engine character limits, parameter encoding
//! and session credentials.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod engines;

// Re-export key types for convenience
pub use crate::core::{
    client::Translator,
    config::{Endpoints, TranslatorConfig},
    errors::{Result, TranslationError},
    language::Language,
    models::{
        Definition, DictionaryEntry, DictionaryWord, Emotion, SpeechRequest, TranslationResult,
        Voice,
    },
    transport::{HttpResponse, HttpTransport, ReqwestTransport},
};
pub use crate::engines::Engine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
