use serde::{Deserialize, Serialize};

/// Each flag independently decides whether that class of URL is rewritten
/// to pass through our proxy endpoints or handed to the client as-is.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProxyConfig {
    #[serde(default)]
    pub use_thumbnail_proxy: bool,
    #[serde(default)]
    pub use_channel_thumbnail_proxy: bool,
    #[serde(default)]
    pub use_video_proxy: bool,
}
