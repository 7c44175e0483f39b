use web_sys::window;

use crate::message::MESSAGE_TTL_MS;

/// Id of the element the board mounts into; its data attributes carry the config.
pub const MOUNT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for API requests. Empty means same origin.
    pub api_base: String,
    pub message_ttl_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_ttl_ms: MESSAGE_TTL_MS,
        }
    }
}

impl BoardConfig {
    pub fn from_attributes(api_base: Option<String>, message_ttl_ms: Option<String>) -> Self {
        let api_base = api_base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let message_ttl_ms = message_ttl_ms
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(MESSAGE_TTL_MS);
        Self {
            api_base,
            message_ttl_ms,
        }
    }

    /// `<div id="app" data-api-base="..." data-message-ttl-ms="...">`
    pub fn from_document() -> Self {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let Some(root) = doc.get_element_by_id(MOUNT_ID) else {
            return Self::default();
        };
        Self::from_attributes(
            root.get_attribute("data-api-base"),
            root.get_attribute("data-message-ttl-ms"),
        )
    }
}
