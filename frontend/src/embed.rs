//! Embedded player URLs.
//!
//! Playback is delegated entirely to the external player; this module only
//! builds the address the player frame loads for a source.

use multiwatch_types::SourceId;
use serde::{Deserialize, Serialize};

/// Default live-stream embed endpoint (resolves a channel to its current live broadcast).
pub const DEFAULT_EMBED_BASE_URL: &str = "https://www.youtube.com/embed/live_stream";

/// Permissions granted to the player frame.
pub const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// How player frames are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_true")]
    pub autoplay: bool,
    #[serde(default = "default_true")]
    pub mute: bool,
}

fn default_base_url() -> String {
    DEFAULT_EMBED_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            autoplay: true,
            mute: true,
        }
    }
}

impl EmbedSettings {
    /// Player URL for a channel.
    pub fn embed_url(&self, id: &SourceId) -> String {
        format!(
            "{}?channel={}&autoplay={}&mute={}",
            self.base_url.trim_end_matches('?'),
            urlencoding::encode(id.as_str()),
            u8::from(self.autoplay),
            u8::from(self.mute)
        )
    }
}
