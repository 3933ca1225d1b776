//! Translation orchestrator
//!
//! Drives the per-engine chunk loop: split the remaining text, supply the
//! Yandex session credential when needed, send the chunk, parse and append
//! the partial result, advance the cursor. Chunks of one call are strictly
//! sequential because later chunks depend on state resolved by earlier ones
//! (detected source language, acquired session ID). Concurrent calls through
//! the same [`Translator`] share the session store behind its mutex.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::chunk::split_index;
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::language::Language;
use crate::core::models::{Emotion, SpeechRequest, TranslationResult, Voice};
use crate::core::session::SessionStore;
use crate::core::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::engines::{bing, google, yandex, Engine};

/// Multi-backend translation client
pub struct Translator {
    config: TranslatorConfig,
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
}

impl Translator {
    /// Create a translator with the production HTTP transport
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout_ms, &config.user_agent)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
            session: SessionStore::new(),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Create with a custom transport
    pub fn with_transport(config: TranslatorConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            session: SessionStore::new(),
        })
    }

    /// Translate `text` into `target`, detecting the source language
    pub async fn translate(
        &self,
        text: &str,
        engine: Engine,
        target: Language,
    ) -> Result<TranslationResult> {
        self.translate_with(text, engine, target, Language::Auto, Language::Auto)
            .await
    }

    /// Translate with explicit source and UI languages
    ///
    /// `Auto` target and UI languages resolve to English; `Auto` source
    /// requests detection from the engine.
    pub async fn translate_with(
        &self,
        text: &str,
        engine: Engine,
        target: Language,
        source: Language,
        ui: Language,
    ) -> Result<TranslationResult> {
        if !engine.supports_translation() {
            return Err(TranslationError::parameters(format!(
                "{} does not support translation",
                engine
            )));
        }

        let target = resolve_auto(target);
        let ui = resolve_auto(ui);

        let source_code = engine.translation_code(source).ok_or_else(|| {
            TranslationError::parameters(format!("{} is not supported by {}", source, engine))
        })?;
        let target_code = engine.translation_code(target).ok_or_else(|| {
            TranslationError::parameters(format!("{} is not supported by {}", target, engine))
        })?;
        let ui_code = engine.translation_code(ui).ok_or_else(|| {
            TranslationError::parameters(format!("{} is not supported by {}", ui, engine))
        })?;

        debug!("Translating {} chars via {} ({} -> {})", text.len(), engine, source_code, target_code);

        let result = match engine {
            Engine::Google => {
                self.translate_google(text, source, target, source_code, target_code, ui_code)
                    .await?
            }
            Engine::Yandex => {
                self.translate_yandex(text, source, target, source_code, target_code, ui_code)
                    .await?
            }
            Engine::Bing => unreachable!("rejected above"),
        };

        info!("Translated {} chars via {}", text.len(), engine);
        Ok(result)
    }

    /// Generate the ordered TTS audio URL sequence for `text`
    ///
    /// With `Language::Auto` the language is first detected through a
    /// lightweight translation request (Google and Yandex only).
    pub async fn synthesize_speech(
        &self,
        text: &str,
        engine: Engine,
        language: Language,
        voice: Voice,
        emotion: Emotion,
    ) -> Result<SpeechRequest> {
        let language = if language == Language::Auto {
            self.detect_language(text, engine).await?
        } else {
            language
        };

        let language_code = engine.tts_code(language).ok_or_else(|| {
            TranslationError::parameters(format!(
                "{} is not supported for TTS by {}",
                language, engine
            ))
        })?;
        let voice_code = engine.voice_code(voice).ok_or_else(|| {
            TranslationError::parameters(format!("voice {:?} is not supported by {}", voice, engine))
        })?;
        let emotion_code = engine.emotion_code(emotion).ok_or_else(|| {
            TranslationError::parameters(format!(
                "emotion {:?} is not supported by {}",
                emotion, engine
            ))
        })?;

        let limit = engine.tts_limit();
        let mut urls = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let index = split_index(rest, limit);
            let chunk = &rest[..index];
            let url = match engine {
                Engine::Google => {
                    google::tts_url(&self.config.endpoints.google_tts, language_code, chunk)?
                }
                Engine::Yandex => yandex::tts_url(
                    &self.config.endpoints.yandex_tts,
                    language_code,
                    voice_code,
                    emotion_code,
                    chunk,
                )?,
                Engine::Bing => {
                    bing::tts_url(&self.config.endpoints.bing_tts, language_code, voice_code, chunk)?
                }
            };
            urls.push(url);
            rest = &rest[index..];
        }

        debug!("Generated {} TTS URLs via {}", urls.len(), engine);
        Ok(SpeechRequest {
            engine,
            language,
            urls,
        })
    }

    /// Google chunk loop
    ///
    /// The `sl` parameter stays at the requested code for every chunk; only
    /// the reported result language is updated after detection.
    async fn translate_google(
        &self,
        text: &str,
        source: Language,
        target: Language,
        source_code: &str,
        target_code: &str,
        ui_code: &str,
    ) -> Result<TranslationResult> {
        let mut result = TranslationResult::new(text, source, target);

        // Dictionary and definitions are only meaningful for inputs that fit
        // into a single request
        let with_enrichment = text.chars().count() < google::TRANSLATE_LIMIT;

        let mut rest = text;
        while !rest.is_empty() {
            let index = split_index(rest, google::TRANSLATE_LIMIT);
            let chunk = &rest[..index];
            debug!("Google chunk of {} bytes", chunk.len());

            let query = [
                ("client", "gtx"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("dt", "bd"),
                ("dt", "ex"),
                ("dt", "ld"),
                ("dt", "md"),
                ("dt", "rw"),
                ("dt", "rm"),
                ("dt", "ss"),
                ("dt", "t"),
                ("dt", "at"),
                ("dt", "qc"),
                ("sl", source_code),
                ("tl", target_code),
                ("hl", ui_code),
                ("q", chunk),
            ];
            let response = self
                .transport
                .get(&self.config.endpoints.google_translate, &query)
                .await?;
            if !response.is_success() {
                return Err(TranslationError::service(format!(
                    "translate request failed with status {}",
                    response.status
                )));
            }

            let parsed = google::parse_translate_response(&response.body, with_enrichment)?;
            result.translation.push_str(&parsed.translation);
            result.translation_translit.push_str(&parsed.translation_translit);
            result.source_translit.push_str(&parsed.source_translit);
            result.dictionary.extend(parsed.dictionary);
            result.definitions.extend(parsed.definitions);

            if result.source_lang == Language::Auto {
                let code = parsed.detected_source.ok_or_else(|| {
                    TranslationError::parsing("unable to parse language from response")
                })?;
                result.source_lang = google::language_from_code(&code).ok_or_else(|| {
                    TranslationError::parsing(format!("unknown detected language {:?}", code))
                })?;
            }

            rest = &rest[index..];
            if !rest.is_empty() && !result.translation.ends_with('\n') {
                result.translation.push(' ');
                result.translation_translit.push(' ');
                result.source_translit.push(' ');
            }
        }

        Ok(result)
    }

    /// Yandex pipeline: translation pass, two transliteration passes, then
    /// the single-word dictionary lookup
    async fn translate_yandex(
        &self,
        text: &str,
        source: Language,
        target: Language,
        source_code: &str,
        target_code: &str,
        ui_code: &str,
    ) -> Result<TranslationResult> {
        let mut result = TranslationResult::new(text, source, target);
        let mut source_code = source_code.to_string();

        let mut rest = text;
        while !rest.is_empty() {
            let index = split_index(rest, yandex::TRANSLATE_LIMIT);
            let chunk = &rest[..index];
            debug!("Yandex chunk of {} bytes", chunk.len());

            let lang_param = if result.source_lang == Language::Auto {
                target_code.to_string()
            } else {
                format!("{}-{}", source_code, target_code)
            };
            let response = self
                .authorized_get(
                    &self.config.endpoints.yandex_translate,
                    &[("srv", "tr-text"), ("text", chunk), ("lang", &lang_param)],
                )
                .await?;

            let parsed = yandex::parse_translate_response(&response.body)?;
            result.translation.push_str(&parsed.translation);

            if result.source_lang == Language::Auto {
                let code = parsed.detected_source.ok_or_else(|| {
                    TranslationError::parsing("unable to parse language from response")
                })?;
                result.source_lang = yandex::language_from_code(&code).ok_or_else(|| {
                    TranslationError::parsing(format!("unknown detected language {:?}", code))
                })?;
                source_code = code;
            }

            rest = &rest[index..];
            if !rest.is_empty() && !result.translation.ends_with('\n') {
                result.translation.push(' ');
            }
        }

        // Transliteration is a no-op for English text
        if result.source_lang != Language::English {
            result.source_translit = self.yandex_translit_pass(text, &source_code).await?;
        }
        if target != Language::English {
            let translation = result.translation.clone();
            result.translation_translit =
                self.yandex_translit_pass(&translation, target_code).await?;
        }

        // Dictionary data is only requested for single-word translations
        if !result.translation.is_empty() && !result.translation.contains(' ') {
            let dict_key = format!("{}-{}", source_code, target_code);
            debug!("Single-word translation, looking up dictionary {}", dict_key);
            let response = self
                .transport
                .get(
                    &self.config.endpoints.yandex_dictionary,
                    &[("text", text), ("ui", ui_code), ("dict", &dict_key)],
                )
                .await?;
            if !response.is_success() {
                return Err(TranslationError::service(format!(
                    "dictionary request failed with status {}",
                    response.status
                )));
            }
            result.dictionary = yandex::parse_dictionary_response(&response.body, &dict_key)?;
        }

        Ok(result)
    }

    /// Chunked transliteration pass over one text
    async fn yandex_translit_pass(&self, text: &str, language_code: &str) -> Result<String> {
        let mut accumulated = String::new();
        let mut rest = text;
        while !rest.is_empty() {
            let index = split_index(rest, yandex::TRANSLIT_LIMIT);
            let chunk = &rest[..index];

            let response = self
                .transport
                .get(
                    &self.config.endpoints.yandex_translit,
                    &[("text", chunk), ("lang", language_code)],
                )
                .await?;
            if !response.is_success() {
                return Err(TranslationError::service(format!(
                    "transliteration request failed with status {}",
                    response.status
                )));
            }

            accumulated.push_str(&yandex::parse_translit_response(&response.body));
            rest = &rest[index..];
            if !rest.is_empty() && !accumulated.ends_with('\n') {
                accumulated.push(' ');
            }
        }
        Ok(accumulated)
    }

    /// Send a session-authorized Yandex request
    ///
    /// An access-denied answer invalidates the cached SID and resends the
    /// request with a fresh one exactly once; a second consecutive denial is
    /// surfaced as a service error.
    async fn authorized_get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        loop {
            let sid = self
                .session
                .sid(&*self.transport, &self.config.endpoints.yandex_session)
                .await?;
            let id_param = format!("{}-0-0", sid);

            let mut authorized: Vec<(&str, &str)> = vec![("id", &id_param)];
            authorized.extend_from_slice(query);

            let response = self.transport.get(url, &authorized).await?;
            if response.is_access_denied() {
                if self.session.invalidate_for_retry().await {
                    continue;
                }
                return Err(TranslationError::service(
                    "session ID was rejected twice in a row",
                ));
            }
            if !response.is_success() {
                return Err(TranslationError::service(yandex::parse_error_message(
                    &response.body,
                )));
            }

            self.session.note_success().await;
            return Ok(response);
        }
    }

    /// Detect the language of `text` for TTS through a one-chunk translation
    async fn detect_language(&self, text: &str, engine: Engine) -> Result<Language> {
        match engine {
            Engine::Google => {
                let index = split_index(text, google::TRANSLATE_LIMIT);
                let query = [
                    ("client", "gtx"),
                    ("sl", "auto"),
                    ("tl", "en"),
                    ("dt", "t"),
                    ("q", &text[..index]),
                ];
                let response = self
                    .transport
                    .get(&self.config.endpoints.google_translate, &query)
                    .await?;
                if !response.is_success() {
                    return Err(TranslationError::service(format!(
                        "detection request failed with status {}",
                        response.status
                    )));
                }
                let code = google::parse_detect_response(&response.body)?;
                google::language_from_code(&code).ok_or_else(|| {
                    TranslationError::parsing(format!("unknown detected language {:?}", code))
                })
            }
            Engine::Yandex => {
                let index = split_index(text, yandex::TRANSLATE_LIMIT);
                let chunk = &text[..index];
                let response = self
                    .authorized_get(
                        &self.config.endpoints.yandex_translate,
                        &[("srv", "tr-text"), ("text", chunk), ("lang", "en")],
                    )
                    .await?;
                let parsed = yandex::parse_translate_response(&response.body)?;
                let code = parsed.detected_source.ok_or_else(|| {
                    TranslationError::parsing("unable to parse language from response")
                })?;
                yandex::language_from_code(&code).ok_or_else(|| {
                    TranslationError::parsing(format!("unknown detected language {:?}", code))
                })
            }
            Engine::Bing => Err(TranslationError::parameters(
                "Bing cannot detect the text language",
            )),
        }
    }
}

/// `Auto` target and UI languages resolve to English
fn resolve_auto(language: Language) -> Language {
    if language == Language::Auto {
        Language::English
    } else {
        language
    }
}
