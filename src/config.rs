//! Widget configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The assistant API lives at a fixed base URL chosen when the bundle is
//! built (`ALEKS_API_BASE_URL`). Everything else is a typed default so host
//! pages never need to negotiate settings at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `ALEKS_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Host element the widget prefers to mount into.
pub const MOUNT_ELEMENT_ID: &str = "ai-chatbot-root";

/// Generic host element used when the preferred one is missing.
pub const FALLBACK_ELEMENT_ID: &str = "root";

const ASSISTANT_NAME: &str = "Aleks";

const GREETING: &str =
    "Hi there! I am Aleks, your AI legal assistant for Filipino citizens. How can I help you today?";

/// Static settings shared with every component through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Assistant API origin, without a trailing slash.
    pub api_base_url: String,
    pub mount_element_id: String,
    pub fallback_element_id: String,
    /// Display name for assistant messages.
    pub assistant_name: String,
    /// First assistant message shown in a fresh conversation.
    pub greeting: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base_url(option_env!("ALEKS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)),
            mount_element_id: MOUNT_ELEMENT_ID.to_owned(),
            fallback_element_id: FALLBACK_ELEMENT_ID.to_owned(),
            assistant_name: ASSISTANT_NAME.to_owned(),
            greeting: GREETING.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Replace the API base URL, normalizing trailing slashes.
    #[must_use]
    pub fn with_api_base_url(mut self, base: &str) -> Self {
        self.api_base_url = normalize_base_url(base);
        self
    }
}

/// Trim whitespace and trailing slashes; an empty value falls back to the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
