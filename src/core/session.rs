//! Yandex session credential (SID) management
//!
//! The Yandex translation API authorizes requests with a short-lived session
//! ID embedded in its web front-end page. The page shows each dot-separated
//! segment of the SID character-reversed; the real credential is recovered by
//! reversing every segment back.
//!
//! The store is owned by one [`crate::Translator`] instance instead of being
//! process-global; concurrent calls through the same translator share it
//! behind a mutex.

use regex::Regex;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::transport::HttpTransport;

/// Marker preceding the obfuscated SID on the front-end page
const SID_MARKER: &str = r"SID: '([^']+)'";

/// Placeholder page served instead of the front-end when Yandex redirects
const REDIRECT_PREFIX: &str = "<html>\r\n<head><title>302 Found";

#[derive(Debug, Default)]
struct SessionState {
    sid: Option<String>,
    /// Set while a regenerated SID is in flight; a second consecutive denial
    /// must fail instead of looping
    second_attempt: bool,
}

/// Mutex-guarded SID cache with single-retry bookkeeping
#[derive(Debug, Default)]
pub struct SessionStore {
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Create an empty store; the SID is fetched lazily on first need
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached SID, acquiring one from the front-end page when absent
    pub async fn sid(&self, transport: &dyn HttpTransport, endpoint: &str) -> Result<String> {
        let mut state = self.state.lock().await;
        if let Some(sid) = &state.sid {
            return Ok(sid.clone());
        }

        let response = transport.get(endpoint, &[]).await?;
        if !response.is_success() {
            return Err(TranslationError::service(format!(
                "session page request failed with status {}",
                response.status
            )));
        }

        let page = response.text();
        if page.starts_with(REDIRECT_PREFIX) {
            return Err(TranslationError::parsing(
                "session page was a redirect placeholder",
            ));
        }

        let sid = extract_sid(&page).ok_or_else(|| {
            TranslationError::parsing("unable to locate session ID on the page")
        })?;

        info!("Acquired new Yandex session ID");
        state.sid = Some(sid.clone());
        Ok(sid)
    }

    /// Drop the cached SID after an access-denied response
    ///
    /// Returns `true` when the caller may re-acquire and resend once; `false`
    /// when the single retry has already been spent and the denial is final.
    pub async fn invalidate_for_retry(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.second_attempt {
            warn!("Regenerated session ID was denied as well, giving up");
            return false;
        }

        warn!("Session ID rejected, regenerating once");
        state.sid = None;
        state.second_attempt = true;
        true
    }

    /// Reset the retry bookkeeping after a successful authorized call
    pub async fn note_success(&self) {
        let mut state = self.state.lock().await;
        state.second_attempt = false;
    }
}

/// Extract and de-obfuscate the SID from the front-end page
fn extract_sid(page: &str) -> Option<String> {
    let marker = Regex::new(SID_MARKER).ok()?;
    let raw = marker.captures(page)?.get(1)?.as_str();
    if raw.is_empty() {
        return None;
    }

    let decoded: Vec<String> = raw
        .split('.')
        .map(|segment| segment.chars().rev().collect())
        .collect();
    Some(decoded.join("."))
}
