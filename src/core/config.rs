//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for the translator
///
/// Chunk-size limits are protocol constants owned by the engine modules and
/// are deliberately not configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent sent with every request
    pub user_agent: String,
    /// Engine endpoint URLs
    pub endpoints: Endpoints,
}

/// Engine endpoint URLs
///
/// Defaults point at the production services; tests override them to aim the
/// orchestrator at canned transports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Endpoints {
    pub google_translate: String,
    pub google_tts: String,
    pub yandex_session: String,
    pub yandex_translate: String,
    pub yandex_translit: String,
    pub yandex_dictionary: String,
    pub yandex_tts: String,
    pub bing_tts: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            google_translate: "https://translate.googleapis.com/translate_a/single".to_string(),
            google_tts: "http://translate.googleapis.com/translate_tts".to_string(),
            yandex_session: "https://translate.yandex.com/".to_string(),
            yandex_translate: "https://translate.yandex.net/api/v1/tr.json/translate".to_string(),
            yandex_translit: "https://translate.yandex.net/translit/translit".to_string(),
            yandex_dictionary: "http://dictionary.yandex.net/dicservice.json/lookupMultiple"
                .to_string(),
            yandex_tts: "https://tts.voicetech.yandex.net/tts".to_string(),
            bing_tts: "https://www.bing.com/tspeak".to_string(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            user_agent: format!("online-translator/{}", env!("CARGO_PKG_VERSION")),
            endpoints: Endpoints::default(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let timeout_ms = std::env::var("OT_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        let user_agent = std::env::var("OT_USER_AGENT")
            .unwrap_or_else(|_| format!("online-translator/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            timeout_ms,
            user_agent,
            endpoints: Endpoints::default(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.user_agent.is_empty() {
            warn!("Empty user agent configured");
        }

        for (name, url) in [
            ("google_translate", &self.endpoints.google_translate),
            ("google_tts", &self.endpoints.google_tts),
            ("yandex_session", &self.endpoints.yandex_session),
            ("yandex_translate", &self.endpoints.yandex_translate),
            ("yandex_translit", &self.endpoints.yandex_translit),
            ("yandex_dictionary", &self.endpoints.yandex_dictionary),
            ("yandex_tts", &self.endpoints.yandex_tts),
            ("bing_tts", &self.endpoints.bing_tts),
        ] {
            if url::Url::parse(url).is_err() {
                return Err(anyhow::anyhow!("invalid {} endpoint: {}", name, url));
            }
        }

        Ok(())
    }
}
